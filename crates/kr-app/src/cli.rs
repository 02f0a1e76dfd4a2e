use std::path::PathBuf;

use clap::Parser;
use kr_core::config::RasterConfig;

/// karel-raster — peint une image case par case avec un robot en grille.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Côté du monde simulé (lignes = colonnes).
    #[arg(long)]
    pub size: Option<usize>,

    /// Nombre de lignes du monde simulé (prioritaire sur --size).
    #[arg(long)]
    pub rows: Option<usize>,

    /// Nombre de colonnes du monde simulé (prioritaire sur --size).
    #[arg(long)]
    pub cols: Option<usize>,

    /// Exporter le monde final en PNG.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Pixels par case dans le PNG exporté.
    #[arg(long)]
    pub cell_px: Option<u32>,

    /// Afficher le monde final dans le terminal.
    #[arg(long, default_value_t = false)]
    pub view: bool,

    /// Déposer le nombre de cases visitées en marqueurs (debug).
    #[arg(long, default_value_t = false)]
    pub dump_visits: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Apply command-line overrides on top of the file config.
    pub fn apply_overrides(&self, config: &mut RasterConfig) {
        if let Some(side) = self.size {
            config.world_rows = side;
            config.world_cols = side;
        }
        if let Some(rows) = self.rows {
            config.world_rows = rows;
        }
        if let Some(cols) = self.cols {
            config.world_cols = cols;
        }
        if let Some(ref path) = self.export {
            config.export_path = Some(path.clone());
        }
        if let Some(px) = self.cell_px {
            config.cell_px = px;
        }
        if self.view {
            config.view = true;
        }
        if self.dump_visits {
            config.dump_visits = true;
        }
        config.clamp_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_config_untouched() {
        let cli = Cli::try_parse_from(["karel-raster"]).unwrap();
        let mut config = RasterConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, RasterConfig::default());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn size_then_axis_overrides() {
        let cli = Cli::try_parse_from(["karel-raster", "--size", "40", "--cols", "41"]).unwrap();
        let mut config = RasterConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!((config.world_rows, config.world_cols), (40, 41));
    }

    #[test]
    fn flags_enable_outputs() {
        let cli = Cli::try_parse_from([
            "karel-raster",
            "--export",
            "out.png",
            "--cell-px",
            "100",
            "--view",
            "--dump-visits",
        ])
        .unwrap();
        let mut config = RasterConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.export_path, Some(PathBuf::from("out.png")));
        assert_eq!(config.cell_px, 64);
        assert!(config.view);
        assert!(config.dump_visits);
    }
}
