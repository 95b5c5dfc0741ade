//! Generation of the audio asset map: a JSON index from each asset category (a sub-directory of
//! the assets root) to the sorted names of the audio files it contains.

use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::{debug, info, trace, warn};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::config::AssetMapConfig;

/// Category name -> sorted file names.  A [`BTreeMap`] so that categories serialize in sorted
/// order.
pub type AssetMap = BTreeMap<String, Vec<String>>;

/// Builds the [`AssetMap`] for the current contents of `cfg.root`
pub fn generate_asset_map(cfg: &AssetMapConfig) -> Result<AssetMap> {
    let mut map = AssetMap::new();
    for (name, path) in list_dir(&cfg.root)? {
        if !path.is_dir() {
            trace!("Skipping {}: not a directory", path.display());
            continue;
        }

        let mut files = list_dir(&path)?
            .into_iter()
            .filter(|(file_name, file_path)| {
                file_name.ends_with(&cfg.suffix) && file_path.is_file()
            })
            .map(|(file_name, _)| file_name)
            .collect::<Vec<_>>();
        // Sort by full file name, before any suffixes are removed
        files.sort();
        // Every occurrence of the suffix goes, not just the one at the end
        if cfg.strip_suffix_in.contains(&name) {
            for file in &mut files {
                *file = file.replace(&cfg.suffix, "");
            }
        }

        debug!("{}: {} files", name, files.len());
        map.insert(name, files);
    }
    Ok(map)
}

/// Writes an [`AssetMap`] as JSON with 4-space indentation
pub fn write_asset_map(map: &AssetMap, path: &Path) -> Result<()> {
    let json = asset_map_json(map)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!("Wrote {} ({} categories)", path.display(), map.len());
    Ok(())
}

/// Serializes an [`AssetMap`] to JSON with 4-space indentation.  The output is pure ASCII: any
/// other character is written as a `\uXXXX` escape.
pub fn asset_map_json(map: &AssetMap) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = AsciiFormatter(PrettyFormatter::with_indent(b"    "));
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    map.serialize(&mut ser).context("serialize asset map")?;
    String::from_utf8(buf).context("asset map JSON is not UTF-8")
}

/// A [`PrettyFormatter`] which escapes non-ASCII characters, using UTF-16 surrogate pairs for
/// characters outside the BMP
struct AsciiFormatter<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (idx, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// The (name, path) of every entry in a directory.  Entries whose names aren't valid UTF-8 can't
/// be put in the JSON, so are skipped with a warning.
fn list_dir(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read {}", dir.display()))?;
        match entry.file_name().into_string() {
            Ok(name) => entries.push((name, entry.path())),
            Err(name) => warn!("Skipping non-UTF-8 name {:?} in {}", name, dir.display()),
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: PathBuf) {
        fs::write(path, b"").unwrap();
    }

    fn sample_assets() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        for dir in ["moves", "pokemon", "misc", "empty"] {
            fs::create_dir(root.join(dir)).unwrap();
        }
        touch(root.join("moves/tackle.mp3"));
        touch(root.join("moves/ember.mp3"));
        touch(root.join("moves/notes.txt"));
        touch(root.join("pokemon/pikachu.mp3"));
        touch(root.join("misc/victory.mp3"));
        touch(root.join("misc/intro.mp3"));
        touch(root.join("readme.mp3"));
        fs::create_dir(root.join("misc/nested.mp3")).unwrap();
        tmp
    }

    fn cfg(root: &Path) -> AssetMapConfig {
        AssetMapConfig {
            root: root.to_owned(),
            ..AssetMapConfig::default()
        }
    }

    #[test]
    fn categories_and_stripping() {
        let tmp = sample_assets();
        let map = generate_asset_map(&cfg(tmp.path())).unwrap();
        assert_eq!(
            map.keys().collect::<Vec<_>>(),
            vec!["empty", "misc", "moves", "pokemon"]
        );
        assert_eq!(map["moves"], vec!["ember", "tackle"]);
        assert_eq!(map["pokemon"], vec!["pikachu"]);
        // Only the configured categories lose their suffix
        assert_eq!(map["misc"], vec!["intro.mp3", "victory.mp3"]);
        assert!(map["empty"].is_empty());
    }

    #[test]
    fn sorted_before_stripping() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("moves")).unwrap();
        // '-' sorts before '.', so "a-b.mp3" < "a.mp3" even though "a" < "a-b"
        touch(tmp.path().join("moves/a.mp3"));
        touch(tmp.path().join("moves/a-b.mp3"));
        let map = generate_asset_map(&cfg(tmp.path())).unwrap();
        assert_eq!(map["moves"], vec!["a-b", "a"]);
    }

    #[test]
    fn json_layout() {
        let mut map = AssetMap::new();
        map.insert("pokemon".to_owned(), vec!["eevee".to_owned()]);
        map.insert("empty".to_owned(), vec![]);
        assert_eq!(
            asset_map_json(&map).unwrap(),
            "{\n    \"empty\": [],\n    \"pokemon\": [\n        \"eevee\"\n    ]\n}"
        );
    }

    #[test]
    fn every_suffix_occurrence_is_stripped() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("pokemon")).unwrap();
        fs::create_dir(tmp.path().join("misc")).unwrap();
        touch(tmp.path().join("pokemon/ditto.mp3.mp3"));
        touch(tmp.path().join("misc/ditto.mp3.mp3"));
        let map = generate_asset_map(&cfg(tmp.path())).unwrap();
        assert_eq!(map["pokemon"], vec!["ditto"]);
        assert_eq!(map["misc"], vec!["ditto.mp3.mp3"]);
    }

    #[test]
    fn non_ascii_names_are_escaped() {
        let mut map = AssetMap::new();
        map.insert(
            "pokemon".to_owned(),
            vec!["flab\u{e9}b\u{e9}".to_owned(), "note\u{1f3b5}".to_owned()],
        );
        let json = asset_map_json(&map).unwrap();
        assert!(json.is_ascii());
        assert_eq!(
            json,
            "{\n    \"pokemon\": [\n        \"flab\\u00e9b\\u00e9\",\n        \"note\\ud83c\\udfb5\"\n    ]\n}"
        );
    }

    #[test]
    fn missing_root_names_the_path() {
        let err = generate_asset_map(&cfg(Path::new("/definitely/not/here"))).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here"));
    }
}
