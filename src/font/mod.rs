//! Symbol table of a loaded shape file or shape font

use crate::error::Result;
use crate::geometry::Path;
use crate::notification::NotificationCollection;
use crate::render::{render_shapes, render_shapes_with, RenderConfiguration};
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

pub mod codes;
pub mod properties;
pub mod symbol;

pub use properties::{FontEmbedding, FontEncoding, FontMode};
pub use symbol::{format_shape_data_string, Symbol};

/// Program returned for unknown shape numbers, renders as nothing.
const NO_DATA: &[i32] = &[];

/// Lookup of shape programs by shape number.
///
/// Unknown numbers return an empty program instead of failing.
pub trait CodeSource {
    fn get_codes(&self, number: i32) -> &[i32];
}

impl CodeSource for HashMap<i32, Vec<i32>> {
    fn get_codes(&self, number: i32) -> &[i32] {
        self.get(&number).map_or(NO_DATA, Vec::as_slice)
    }
}

impl CodeSource for BTreeMap<i32, Vec<i32>> {
    fn get_codes(&self, number: i32) -> &[i32] {
        self.get(&number).map_or(NO_DATA, Vec::as_slice)
    }
}

impl CodeSource for IndexMap<i32, Vec<i32>> {
    fn get_codes(&self, number: i32) -> &[i32] {
        self.get(&number).map_or(NO_DATA, Vec::as_slice)
    }
}

/// A loaded SHX/SHP file: font metadata plus the shapes by number.
///
/// Files with [`FontEncoding::ShapeFileOnly`] are plain shape collections,
/// all other encodings are fonts whose shape numbers are character codes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeFile {
    pub name: String,
    /// Height of capital letters above the baseline
    pub above: i32,
    /// Depth of descenders below the baseline
    pub below: i32,
    pub mode: FontMode,
    pub encoding: FontEncoding,
    pub embedding: FontEmbedding,
    /// Shapes in definition order
    symbols: IndexMap<i32, Symbol>,
    /// Non-fatal findings of the loader
    pub notifications: NotificationCollection,
}

impl ShapeFile {
    /// Create an empty shape file
    pub fn new(
        name: impl Into<String>,
        above: i32,
        below: i32,
        mode: FontMode,
        encoding: FontEncoding,
        embedding: FontEmbedding,
    ) -> Self {
        ShapeFile {
            name: name.into(),
            above,
            below,
            mode,
            encoding,
            embedding,
            symbols: IndexMap::new(),
            notifications: NotificationCollection::new(),
        }
    }

    pub fn cap_height(&self) -> f64 {
        self.above as f64
    }

    pub fn descender(&self) -> f64 {
        self.below as f64
    }

    pub fn is_font(&self) -> bool {
        self.encoding != FontEncoding::ShapeFileOnly
    }

    pub fn is_shape_file(&self) -> bool {
        self.encoding == FontEncoding::ShapeFileOnly
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Add a symbol, returns the replaced symbol with the same number
    pub fn insert(&mut self, symbol: Symbol) -> Option<Symbol> {
        self.symbols.insert(symbol.number, symbol)
    }

    /// Remove a symbol, keeping the order of the remaining symbols
    pub fn remove(&mut self, number: i32) -> Option<Symbol> {
        self.symbols.shift_remove(&number)
    }

    pub fn get(&self, number: i32) -> Option<&Symbol> {
        self.symbols.get(&number)
    }

    pub fn contains(&self, number: i32) -> bool {
        self.symbols.contains_key(&number)
    }

    /// Iterate over all symbols in definition order
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    /// Find the first symbol named `name`
    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.symbols.values().find(|symbol| symbol.name == name)
    }

    /// Program of shape `number`, empty for unknown numbers
    pub fn get_codes(&self, number: i32) -> &[i32] {
        self.symbols
            .get(&number)
            .map_or(NO_DATA, |symbol| symbol.data.as_slice())
    }

    /// SHP text of shape `shape_number`, optionally exported as `as_num`
    pub fn shape_string(&self, shape_number: i32, as_num: Option<i32>) -> Option<Vec<String>> {
        self.get(shape_number).map(|symbol| symbol.export_str(as_num))
    }

    /// Render a single shape starting at the origin
    pub fn render_shape(&self, number: i32, stacked: bool) -> Result<Path> {
        self.render_shapes(&[number], stacked)
    }

    /// Render shapes one after another starting at the origin
    pub fn render_shapes(&self, numbers: &[i32], stacked: bool) -> Result<Path> {
        render_shapes(numbers, self, stacked, Default::default(), false)
    }

    /// Render the characters of `text`, each character code is a shape number.
    ///
    /// The pen is put back on the baseline after each character.
    pub fn render_text(&self, text: &str, stacked: bool) -> Result<Path> {
        let numbers: Vec<i32> = text.chars().map(|c| c as i32).collect();
        render_shapes(&numbers, self, stacked, Default::default(), true)
    }

    /// Render shapes with full control over the renderer setup
    pub fn render_with(&self, numbers: &[i32], config: &RenderConfiguration) -> Result<Path> {
        render_shapes_with(numbers, self, config)
    }
}

impl CodeSource for ShapeFile {
    fn get_codes(&self, number: i32) -> &[i32] {
        ShapeFile::get_codes(self, number)
    }
}
