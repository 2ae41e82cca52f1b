use crate::SketchApp;
use crate::tool::ToolId;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            // Undo/Redo section
            ui.horizontal(|ui| {
                let history = app.sketch().history();
                let can_undo = history.can_undo();
                let can_redo = history.can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("undo")).clicked() {
                    app.sketch_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("redo")).clicked() {
                    app.sketch_mut().redo();
                }
                if ui.button("clear").clicked() {
                    app.sketch_mut().clear_all();
                }
            });

            let history = app.sketch().history();
            ui.label(format!(
                "History: {}  Redo: {}",
                history.len(),
                history.redo_buffer().len()
            ));
            ui.separator();

            // Thickness
            let (thin, thick) = {
                let config = app.sketch().config();
                (config.thin_width, config.thick_width)
            };
            let width = app.sketch().tool_state().stroke_width;
            ui.horizontal(|ui| {
                if ui.selectable_label(width == thin, "thin").clicked() {
                    app.set_stroke_width(thin);
                }
                if ui.selectable_label(width == thick, "thick").clicked() {
                    app.set_stroke_width(thick);
                }
            });
            ui.label(format!("line thickness: {}", width));

            let mut color = app.sketch().tool_state().color;
            ui.horizontal(|ui| {
                ui.label("Color:");
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.sketch_mut().set_color(color);
                }
            });
            ui.separator();

            // Tool selection
            let active = app.sketch().tool_state().active.clone();
            let tools: Vec<ToolId> = app.sketch().tools().palette().tools().to_vec();
            ui.horizontal_wrapped(|ui| {
                for tool in tools {
                    if ui.selectable_label(tool == active, tool.label()).clicked() {
                        app.select_tool(tool);
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.text_edit_singleline(&mut app.sticker_text);
                if ui.button("add sticker").clicked() {
                    app.add_custom_sticker();
                }
            });
            ui.separator();

            if ui.button("export").clicked() {
                app.export_to_file();
            }

            if let Some(status) = &app.status {
                ui.separator();
                ui.label(status);
            }
        });
}
