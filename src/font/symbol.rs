//! Shape symbols and their SHP text representation

/// Lines of exported shape data stay below this length.
const MAX_LINE_LENGTH: usize = 80;

/// One numbered, named shape and its bytecode program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Symbol {
    /// Font-local shape number
    pub number: i32,
    /// Declared encoded length, informational only
    pub byte_count: i32,
    pub name: String,
    /// Opcodes and operands, terminated by `0`
    pub data: Vec<i32>,
}

impl Symbol {
    pub fn new(number: i32, byte_count: i32, name: impl Into<String>, data: Vec<i32>) -> Self {
        Symbol {
            number,
            byte_count,
            name: name.into(),
            data,
        }
    }

    /// Export as SHP text lines, optionally under a different shape number.
    ///
    /// ```
    /// use shx_fonts::Symbol;
    ///
    /// let symbol = Symbol::new(65, 4, "A", vec![1, 2, 3, 0]);
    /// assert_eq!(symbol.export_str(None), vec!["*00041,4,A", "1,2,3,0"]);
    /// ```
    pub fn export_str(&self, as_num: Option<i32>) -> Vec<String> {
        let number = as_num.unwrap_or(self.number);
        let mut export = vec![format!(
            "*{},{},{}",
            format_shape_number(number),
            self.byte_count,
            self.name
        )];
        export.extend(format_shape_data_string(&self.data));
        export
    }
}

/// Format a shape number as 5-digit upper-case hex, a negative number keeps
/// its sign in front of the digits.
fn format_shape_number(number: i32) -> String {
    if number < 0 {
        format!("-{:04X}", number.unsigned_abs())
    } else {
        format!("{:05X}", number)
    }
}

/// Split shape data into comma-separated lines shorter than 80 characters.
///
/// Continuation lines start with a comma, so the SHP reader merges them
/// back into the previous line.
pub fn format_shape_data_string(data: &[i32]) -> Vec<String> {
    let mut export = Vec::new();
    let mut line = String::new();
    for num in data {
        let item = format!("{},", num);
        if line.len() + item.len() < MAX_LINE_LENGTH {
            line.push_str(&item);
        } else {
            line.pop();
            export.push(std::mem::take(&mut line));
            line = format!(",{}", item);
        }
    }
    if !line.is_empty() {
        line.pop();
        export.push(line);
    }
    export
}
