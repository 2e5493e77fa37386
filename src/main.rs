use anyhow::Context;
use clap::Parser;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use nalgebra as na;
use panelflow::export::Report;
use panelflow::{
    contour, Config, ForceCoefficients, FreeStream, PanelError, PanelMethod, PressureDistribution,
    Solution,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "panelflow", about = "Doublet panel method pressure viewer")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Solve once and write a report (.json or .csv, `-` for stdout) instead of opening the viewer
    #[arg(long)]
    export: Option<PathBuf>,
}

struct Analysis {
    method: PanelMethod,
    solution: Solution,
    distribution: PressureDistribution,
    coefficients: ForceCoefficients,
}

fn run_analysis(config: &Config) -> Result<Analysis, PanelError> {
    let airfoil = contour::naca_four_digit(&config.airfoil.naca, config.airfoil.points_per_side)?;
    let method = PanelMethod::new(&airfoil, &config.solver)?;
    let freestream = FreeStream::from_degrees(config.flow.angle_of_attack_deg, config.flow.speed)?;
    let solution = method.solve(&freestream)?;

    Ok(Analysis {
        distribution: method.pressure_distribution(&solution),
        coefficients: method.force_coefficients(&solution),
        method,
        solution,
    })
}

struct AirflowSimulator {
    config: Config,
    contour: Vec<na::Point2<f64>>,
    analysis: Option<Analysis>,
    error: Option<String>,
    show_panels: bool,
    show_wake: bool,
}

impl AirflowSimulator {
    fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let mut app = Self {
            config,
            contour: Vec::new(),
            analysis: None,
            error: None,
            show_panels: true,
            show_wake: true,
        };
        app.regenerate_contour();
        app
    }

    fn regenerate_contour(&mut self) {
        match contour::naca_four_digit(&self.config.airfoil.naca, self.config.airfoil.points_per_side) {
            Ok(points) => {
                self.contour = points;
                self.analysis = None;
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn run_simulation(&mut self) {
        match run_analysis(&self.config) {
            Ok(analysis) => {
                self.analysis = Some(analysis);
                self.error = None;
            }
            Err(err) => {
                log::warn!("{} stage failed: {}", err.stage(), err);
                self.analysis = None;
                self.error = Some(format!("{} failed: {}", err.stage(), err));
            }
        }
    }

    fn get_airfoil_points(&self) -> PlotPoints {
        let points: Vec<[f64; 2]> = self.contour.iter().map(|p| [p.x, p.y]).collect();
        PlotPoints::new(points)
    }

    fn draw_geometry(&self, plot_ui: &mut egui_plot::PlotUi) {
        let airfoil_line = Line::new(self.get_airfoil_points())
            .color(egui::Color32::DARK_RED)
            .width(2.0)
            .name("Contour");
        plot_ui.line(airfoil_line);

        let Some(analysis) = &self.analysis else {
            return;
        };
        let geometry = analysis.method.geometry();

        if self.show_wake {
            let wake: Vec<[f64; 2]> = geometry.wake.points().iter().map(|p| [p.x, p.y]).collect();
            plot_ui.line(
                Line::new(wake)
                    .color(egui::Color32::GRAY)
                    .width(1.0)
                    .name("Wake"),
            );
        }

        // Panel normals scaled by doublet strength
        if self.show_panels {
            let scale = 0.1 / analysis.solution.freestream.speed();
            for (panel, strength) in geometry.panels.iter().zip(&analysis.solution.strengths) {
                let tip = panel.midpoint + panel.normal * (*strength * scale);
                let normal_line = Line::new(vec![[panel.midpoint.x, panel.midpoint.y], [tip.x, tip.y]])
                    .color(egui::Color32::RED)
                    .width(1.0);
                plot_ui.line(normal_line);
            }
        }
    }

    fn plot_pressure_distribution(&self, plot_ui: &mut egui_plot::PlotUi) {
        let Some(analysis) = &self.analysis else {
            return;
        };
        let distribution = &analysis.distribution;

        // -Cp so that suction plots upward
        let flip = |points: Vec<[f64; 2]>| -> Vec<[f64; 2]> {
            points.into_iter().map(|[x, cp]| [x, -cp]).collect()
        };

        let upper_line = Line::new(flip(distribution.upper()))
            .color(egui::Color32::from_rgb(255, 100, 100))
            .width(2.0)
            .name("Upper Surface -Cp");
        let lower_line = Line::new(flip(distribution.lower()))
            .color(egui::Color32::from_rgb(100, 100, 255))
            .width(2.0)
            .name("Lower Surface -Cp");

        plot_ui.line(upper_line);
        plot_ui.line(lower_line);

        let zero = Line::new(vec![[0.0, 0.0], [1.0, 0.0]])
            .color(egui::Color32::from_rgba_premultiplied(100, 100, 100, 100))
            .width(1.0);
        plot_ui.line(zero);
    }

    fn show_performance_metrics(&self, ui: &mut egui::Ui) {
        if let Some(analysis) = &self.analysis {
            let metrics = &analysis.coefficients;
            ui.heading("Performance Metrics");

            egui::Frame::none()
                .fill(ui.visuals().extreme_bg_color)
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.label(format!("Lift Coefficient (CL): {:.3}", metrics.cl));
                        ui.label(format!("Pressure Drag (CD): {:.4}", metrics.cd));
                        ui.label(format!("Moment Coefficient (CM c/4): {:.3}", metrics.cm));
                        ui.label(format!("Panels: {}", analysis.solution.len()));
                    });
                });
        }
    }
}

impl eframe::App for AirflowSimulator {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Simulation Controls");

            ui.horizontal(|ui| {
                ui.label("NACA:");
                if ui.text_edit_singleline(&mut self.config.airfoil.naca).changed()
                    && self.config.airfoil.naca.len() == 4
                {
                    self.regenerate_contour();
                }
            });

            if ui
                .add(
                    egui::Slider::new(&mut self.config.airfoil.points_per_side, 10..=150)
                        .text("Points per Side"),
                )
                .changed()
            {
                self.regenerate_contour();
            }

            ui.add(
                egui::Slider::new(&mut self.config.flow.angle_of_attack_deg, -10.0..=10.0)
                    .text("Angle of Attack (°)"),
            );
            ui.add(
                egui::Slider::new(&mut self.config.flow.speed, 0.1..=200.0)
                    .text("Velocity (m/s)"),
            );

            ui.separator();
            ui.heading("Wake");
            ui.add(
                egui::Slider::new(&mut self.config.solver.wake.length, 0.5..=100.0)
                    .logarithmic(true)
                    .text("Length (chords)"),
            );
            ui.add(
                egui::Slider::new(&mut self.config.solver.wake.num_points, 2..=400)
                    .text("Points"),
            );

            ui.separator();
            ui.checkbox(&mut self.show_panels, "Show Panel Strengths");
            ui.checkbox(&mut self.show_wake, "Show Wake");

            if ui.button("Run Simulation").clicked() {
                self.run_simulation();
            }

            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::RED, error.as_str());
            }

            ui.separator();
            if self.analysis.is_some() {
                self.show_performance_metrics(ui);
            } else {
                ui.label("Run simulation to see performance metrics");
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Airfoil");

            let available = ui.available_height();
            Plot::new("airfoil_plot")
                .height(available * 0.45)
                .data_aspect(1.0)
                .include_x(-0.1)
                .include_x(1.5)
                .include_y(-0.3)
                .include_y(0.3)
                .legend(Legend::default())
                .show(ui, |plot_ui| self.draw_geometry(plot_ui));

            ui.heading("Pressure Distribution");
            Plot::new("pressure_plot")
                .include_x(0.0)
                .include_x(1.0)
                .include_y(-1.0)
                .include_y(1.0)
                .legend(Legend::default())
                .show(ui, |plot_ui| self.plot_pressure_distribution(plot_ui));
        });
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(path) = &args.export {
        let analysis = run_analysis(&config)?;
        Report::new(&analysis.method, &analysis.solution)
            .write_to_path(path)
            .with_context(|| format!("failed to write report {}", path.display()))?;
        log::info!(
            "wrote {} panels to {} (cl = {:.4})",
            analysis.solution.len(),
            path.display(),
            analysis.coefficients.cl
        );
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Panel Method Viewer",
        options,
        Box::new(move |cc| Box::new(AirflowSimulator::new(cc, config))),
    )
    .map_err(|err| anyhow::anyhow!("viewer failed: {err}"))
}
