use cert_quiz::QuizApp;
use cert_quiz::config::QuizConfig;
use log::error;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = QuizConfig::from_env();
    // Un banco mal formado es fatal: no hay nada que mostrar
    let app = match QuizApp::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            error!("invalid question bank: {e}");
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([720.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        &config.title,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
