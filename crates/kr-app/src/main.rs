use anyhow::{Context, Result};
use clap::Parser;
use kr_core::Robot;
use kr_core::config::RasterConfig;
use kr_raster::debug::dump_value;
use kr_raster::{RasterError, RenderReport};
use kr_render::ui::StatusLine;
use kr_world::GridWorld;

pub mod cli;
pub mod view;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config, puis les overrides CLI
    let mut config = resolve_config(&cli)?;
    cli.apply_overrides(&mut config);

    // 4. Construire le monde simulé
    let mut world = GridWorld::from_config(&config).context("Monde invalide")?;

    // 5. Sonde + rendu
    let (result, status) = render(&mut world, config.dump_visits);

    // 6. Sorties, y compris pour un rendu partiel
    if let Some(ref path) = config.export_path {
        kr_export::export_png(&world, path, config.cell_px)?;
    }
    if config.view {
        view::show(&world, &status)?;
    } else {
        println!("{}", status.message);
    }

    result.map(|_| ()).context("Rendu interrompu")
}

/// Rend l'image embarquée et construit la ligne de statut.
///
/// Un échec du dump des visites est journalisé et signalé dans le statut,
/// sans interrompre les sorties.
fn render<R: Robot + ?Sized>(
    robot: &mut R,
    dump_visits: bool,
) -> (Result<RenderReport, RasterError>, StatusLine) {
    let result = kr_raster::rasterize_embedded(robot);
    let status = match &result {
        Ok(report) => {
            let mut message = format!(
                "{0}×{0}{1} : {2} cases peintes, {3} marqueurs",
                report.side,
                if report.upscaled { " (upscale 2×)" } else { "" },
                report.visited,
                report.markers
            );
            if dump_visits && let Err(e) = dump_value(robot, report.visited) {
                log::error!("Dump des visites : {e}");
                message.push_str(&format!(" (dump échoué : {e})"));
            }
            StatusLine {
                message,
                failed: false,
            }
        }
        Err(e) => {
            log::error!("Rendu interrompu : {e}");
            StatusLine {
                message: e.to_string(),
                failed: true,
            }
        }
    };
    (result, status)
}

/// Config file if present, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<RasterConfig> {
    if cli.config.exists() {
        kr_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(RasterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use kr_core::{ColorName, Heading, RobotError};

    use super::*;

    /// Monde simulé qui refuse les marqueurs au-delà d'un quota.
    struct MarkerQuota {
        world: GridWorld,
        left: usize,
    }

    impl Robot for MarkerQuota {
        fn move_forward(&mut self) -> Result<(), RobotError> {
            self.world.move_forward()
        }
        fn turn_left(&mut self) {
            self.world.turn_left();
        }
        fn turn_right(&mut self) {
            self.world.turn_right();
        }
        fn front_is_clear(&self) -> bool {
            self.world.front_is_clear()
        }
        fn left_is_blocked(&self) -> bool {
            self.world.left_is_blocked()
        }
        fn right_is_blocked(&self) -> bool {
            self.world.right_is_blocked()
        }
        fn facing(&self, heading: Heading) -> bool {
            self.world.facing(heading)
        }
        fn paint(&mut self, color: ColorName) -> Result<(), RobotError> {
            self.world.paint(color)
        }
        fn put_marker(&mut self) -> Result<(), RobotError> {
            if self.left == 0 {
                let (row, col) = self.world.position();
                return Err(RobotError::Crashed {
                    row,
                    col,
                    heading: self.world.heading(),
                });
            }
            self.left -= 1;
            self.world.put_marker()
        }
        fn markers_present(&self) -> bool {
            self.world.markers_present()
        }
        fn take_marker(&mut self) -> Result<(), RobotError> {
            self.world.take_marker()
        }
    }

    #[test]
    fn successful_render_reports_counts() {
        let mut world = GridWorld::new(20, 20).unwrap();
        let (result, status) = render(&mut world, false);
        assert!(result.is_ok());
        assert!(!status.failed);
        assert!(status.message.contains("400 cases peintes"));
    }

    #[test]
    fn failed_dump_keeps_the_render_result() {
        // The embedded frame carries 9 markers; the dump needs 400 more.
        let mut robot = MarkerQuota {
            world: GridWorld::new(20, 20).unwrap(),
            left: 9,
        };
        let (result, status) = render(&mut robot, true);
        assert_eq!(result.unwrap().visited, 400);
        assert!(!status.failed);
        assert!(status.message.contains("dump échoué"));
        assert_eq!(robot.world.painted_cells(), 400);
    }

    #[test]
    fn failed_render_is_flagged() {
        let mut world = GridWorld::new(7, 7).unwrap();
        let (result, status) = render(&mut world, true);
        assert!(result.is_err());
        assert!(status.failed);
        assert_eq!(world.counts().markers_put, 0);
    }
}
