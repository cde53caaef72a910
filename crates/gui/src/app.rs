use circuit_analyzer::analysis::AnalysisType;
use circuit_analyzer::form::AnalyzerForm;
use eframe::egui;

pub struct AnalyzerApp {
    form: AnalyzerForm,
}

impl AnalyzerApp {
    pub fn new(analysis: AnalysisType) -> Self {
        Self {
            form: AnalyzerForm::with_analysis(analysis),
        }
    }

    fn analysis_selector(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.form.analysis();
        ui.horizontal(|ui| {
            ui.label("Analysis type:");
            egui::ComboBox::from_id_salt("analysis_type")
                .width(220.0)
                .selected_text(selected.name())
                .show_ui(ui, |ui| {
                    for analysis in AnalysisType::ALL {
                        ui.selectable_value(&mut selected, analysis, analysis.name());
                    }
                });
        });
        if selected != self.form.analysis() {
            self.form.select(selected);
        }
    }

    fn input_rows(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("input_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for field in self.form.fields_mut().iter_mut().filter(|f| f.is_visible()) {
                    ui.label(field.caption());
                    ui.text_edit_singleline(field.text_mut());
                    ui.end_row();
                }
            });
    }
}

impl eframe::App for AnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Circuit Analyzer");
            ui.separator();

            self.analysis_selector(ui);

            let mut formula = self.form.formula_text();
            ui.add(
                egui::TextEdit::multiline(&mut formula)
                    .id_salt("formula_text")
                    .desired_rows(5)
                    .desired_width(f32::INFINITY)
                    .interactive(false),
            );
            ui.add_space(8.0);

            self.input_rows(ui);
            ui.add_space(8.0);

            if ui.button("Calculate").clicked() {
                if let Err(err) = self.form.calculate() {
                    tracing::debug!(%err, "calculation rejected");
                }
            }
            ui.label(egui::RichText::new(self.form.result()).strong());
        });
    }
}
