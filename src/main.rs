use tracing_subscriber::EnvFilter;

const OUTPUT_PATH: &str = "output/mandelbrot.ppm";
const ZOOM_TICKS: usize = 120;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    let presenter = mandelbrot_explorer::PpmFilePresenter::new();
    let mut controller = mandelbrot_explorer::FlightSnapshotController::new(
        presenter,
        mandelbrot_explorer::ExplorerConfig::default(),
        mandelbrot_explorer::SurfaceSize::new(800, 600),
    )?;

    // Seahorse valley, (-0.745, 0.1) in the default 800x600 view.
    let target = mandelbrot_explorer::PointerTarget::new(0.459_166_7, 0.522_222_2)
        .ok_or("flight target outside the frame")?;

    controller.fly(target, ZOOM_TICKS);
    controller.write(OUTPUT_PATH)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
