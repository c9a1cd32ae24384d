//! Catalog files
//!
//! Catalogs are stored as RON, either plain (hand-edited overrides) or
//! brotli-compressed (exported bundles). The loader detects the format from
//! the first byte.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use super::Catalog;
use crate::error::FactoryError;

/// Load and validate a catalog file, plain or compressed.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, FactoryError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    // RON files start with '(' or whitespace, brotli is binary
    let is_plain_ron = bytes
        .first()
        .map(|&b| b == b'(' || b == b' ' || b == b'\n' || b == b'\r' || b == b'\t')
        .unwrap_or(false);

    let contents = if is_plain_ron {
        String::from_utf8(bytes).map_err(|e| FactoryError::Compression(format!("invalid UTF-8: {}", e)))?
    } else {
        let mut decompressed = Vec::new();
        brotli::BrotliDecompress(&mut Cursor::new(&bytes), &mut decompressed)
            .map_err(|e| FactoryError::Compression(format!("brotli decompression failed: {}", e)))?;
        String::from_utf8(decompressed)
            .map_err(|e| FactoryError::Compression(format!("invalid UTF-8 after decompression: {}", e)))?
    };

    let catalog = match load_catalog_from_str(&contents) {
        Ok(catalog) => catalog,
        Err(FactoryError::Parse(e)) => {
            log::error!("RON parse error in {}: {}", path.display(), e);
            let line_idx = e.position.line.saturating_sub(1);
            if let Some(line) = contents.lines().nth(line_idx) {
                log::error!("  Line {}: {}", e.position.line, line.trim());
            }
            return Err(FactoryError::Parse(e));
        }
        Err(e) => return Err(e),
    };

    log::info!("loaded {} recipes from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Parse and validate a catalog from RON text.
pub fn load_catalog_from_str(s: &str) -> Result<Catalog, FactoryError> {
    let catalog: Catalog = ron::from_str(s)?;
    catalog.validate()?;
    Ok(catalog)
}

fn to_ron(catalog: &Catalog) -> Result<String, FactoryError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());
    Ok(ron::ser::to_string_pretty(catalog, config)?)
}

/// Save a catalog as brotli-compressed RON.
pub fn save_catalog<P: AsRef<Path>>(catalog: &Catalog, path: P) -> Result<(), FactoryError> {
    let ron_string = to_ron(catalog)?;

    // Quality 6, window 22
    let mut compressed = Vec::new();
    brotli::BrotliCompress(
        &mut Cursor::new(ron_string.as_bytes()),
        &mut compressed,
        &brotli::enc::BrotliEncoderParams {
            quality: 6,
            lgwin: 22,
            ..Default::default()
        },
    )
    .map_err(|e| FactoryError::Compression(format!("brotli compression failed: {}", e)))?;

    fs::write(path, compressed)?;
    Ok(())
}

/// Save a catalog as plain RON, for hand editing.
pub fn save_catalog_plain<P: AsRef<Path>>(catalog: &Catalog, path: P) -> Result<(), FactoryError> {
    fs::write(path, to_ron(catalog)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectType;
    use crate::recipe::{PartSpec, Recipe};

    #[test]
    fn test_compressed_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.ron.br");

        save_catalog(Catalog::standard(), &path).unwrap();
        let loaded = load_catalog(&path).unwrap();
        assert_eq!(&loaded, Catalog::standard());
    }

    #[test]
    fn test_plain_file_is_detected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.ron");

        let mut catalog = Catalog::new();
        catalog.insert(ObjectType::Stone, Recipe::single("stone").floor_adjusted());
        save_catalog_plain(&catalog, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with('('));
        assert_eq!(load_catalog(&path).unwrap(), catalog);
    }

    #[test]
    fn test_hand_written_recipe() {
        let text = r#"(
            recipes: {
                Stone: (
                    parts: [(rank: 0, parent: None, mesh: "stone")],
                    floor_adjust: true,
                    height: Fixed(0.0),
                ),
            },
        )"#;
        let catalog = load_catalog_from_str(text).unwrap();
        let stone = catalog.get(ObjectType::Stone).unwrap();
        assert!(stone.floor_adjust);
        assert!(stone.crash_spheres.is_empty());
    }

    #[test]
    fn test_load_rejects_forward_reference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ron");

        let mut catalog = Catalog::new();
        catalog.insert(
            ObjectType::Radar,
            Recipe::single("radar1").part(PartSpec::child(1, 3, "radar2")),
        );
        save_catalog_plain(&catalog, &path).unwrap();

        assert!(matches!(load_catalog(&path), Err(FactoryError::Validation(_))));
    }

    #[test]
    fn test_garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.bin");
        fs::write(&path, [0xffu8, 0x00, 0x13, 0x37]).unwrap();
        assert!(load_catalog(&path).is_err());

        assert!(matches!(load_catalog(dir.path().join("missing.ron")), Err(FactoryError::Io(_))));
    }
}
