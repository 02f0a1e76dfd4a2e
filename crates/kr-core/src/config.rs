use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Côté natif de l'image embarquée.
pub const NATIVE_SIDE: usize = 20;

/// Configuration d'un rendu : monde simulé, export, affichage.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use kr_core::config::RasterConfig;
/// let config = RasterConfig::default();
/// assert_eq!(config.world_rows, 20);
/// assert_eq!(config.world_cols, 20);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RasterConfig {
    // === Monde ===
    /// Nombre de lignes du monde simulé.
    pub world_rows: usize,
    /// Nombre de colonnes du monde simulé.
    pub world_cols: usize,

    // === Export ===
    /// Taille d'une case en pixels dans le PNG exporté.
    pub cell_px: u32,
    /// Fichier PNG de sortie. `None` = pas d'export.
    pub export_path: Option<PathBuf>,

    // === Affichage ===
    /// Afficher le monde final dans le terminal.
    pub view: bool,

    // === Debug ===
    /// Déposer le nombre de cases visitées sous forme de marqueurs.
    pub dump_visits: bool,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            world_rows: NATIVE_SIDE,
            world_cols: NATIVE_SIDE,
            cell_px: 16,
            export_path: None,
            view: false,
            dump_visits: false,
        }
    }
}

impl RasterConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization and after CLI overrides.
    pub fn clamp_all(&mut self) {
        if self.world_rows == 0 || self.world_cols == 0 {
            log::warn!("Monde vide demandé, ramené à 1 case minimum");
        }
        self.world_rows = self.world_rows.clamp(1, 200);
        self.world_cols = self.world_cols.clamp(1, 200);
        self.cell_px = self.cell_px.clamp(1, 64);
    }
}

/// Structure TOML intermédiaire, toutes sections optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    world: Option<WorldSection>,
    export: Option<ExportSection>,
    view: Option<ViewSection>,
    debug: Option<DebugSection>,
}

#[derive(Deserialize)]
struct WorldSection {
    /// Shorthand for a square world; `rows`/`cols` win if also present.
    side: Option<usize>,
    rows: Option<usize>,
    cols: Option<usize>,
}

#[derive(Deserialize)]
struct ExportSection {
    cell_px: Option<u32>,
    path: Option<PathBuf>,
}

#[derive(Deserialize)]
struct ViewSection {
    show: Option<bool>,
}

#[derive(Deserialize)]
struct DebugSection {
    dump_visits: Option<bool>,
}

/// Parse un document TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the document is not valid TOML for this schema.
///
/// # Example
/// ```
/// use kr_core::config::parse_config;
/// let config = parse_config("[world]\nside = 40\n").unwrap();
/// assert_eq!(config.world_rows, 40);
/// assert_eq!(config.world_cols, 40);
/// ```
pub fn parse_config(content: &str) -> Result<RasterConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = RasterConfig::default();

    if let Some(w) = file.world {
        if let Some(v) = w.side {
            config.world_rows = v;
            config.world_cols = v;
        }
        if let Some(v) = w.rows {
            config.world_rows = v;
        }
        if let Some(v) = w.cols {
            config.world_cols = v;
        }
    }
    if let Some(e) = file.export {
        if let Some(v) = e.cell_px {
            config.cell_px = v;
        }
        if e.path.is_some() {
            config.export_path = e.path;
        }
    }
    if let Some(v) = file.view.and_then(|s| s.show) {
        config.view = v;
    }
    if let Some(v) = file.debug.and_then(|s| s.dump_visits) {
        config.dump_visits = v;
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use kr_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RasterConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config =
        parse_config(&content).with_context(|| format!("Config invalide : {}", path.display()))?;
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}
