// src/encoder.rs
// Turns an ordered run of byte values into a C array declaration.
//
// Two phases: a `TableBuilder` takes exactly `capacity` values, `finish()`
// freezes them into a `FilledTable`, and only that can be rendered.

use crate::error::TableError;

pub(crate) fn is_c_ident(s: &str) -> bool {
    let mut it = s.bytes();
    match it.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    it.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[derive(Debug, Clone)]
pub struct TableBuilder {
    type_name: String,
    array_name: String,
    read_only: bool,
    capacity: usize,
    values: Vec<u8>,
}

impl TableBuilder {
    pub fn new(
        type_name: &str,
        array_name: &str,
        read_only: bool,
        capacity: usize,
    ) -> Result<Self, TableError> {
        if !is_c_ident(type_name) {
            return Err(TableError::Configuration(format!(
                "type name {type_name:?} is not a C identifier"
            )));
        }
        if !is_c_ident(array_name) {
            return Err(TableError::Configuration(format!(
                "array name {array_name:?} is not a C identifier"
            )));
        }
        if capacity == 0 {
            return Err(TableError::Configuration("capacity must be > 0".into()));
        }
        Ok(Self {
            type_name: type_name.to_string(),
            array_name: array_name.to_string(),
            read_only,
            capacity,
            values: Vec::with_capacity(capacity),
        })
    }

    pub fn append(&mut self, value: u8) -> Result<(), TableError> {
        if self.values.len() == self.capacity {
            return Err(TableError::Configuration(format!(
                "{}: append past declared capacity {}",
                self.array_name, self.capacity
            )));
        }
        self.values.push(value);
        Ok(())
    }

    /// Closes the accumulation phase. Fails unless every slot was filled.
    pub fn finish(self) -> Result<FilledTable, TableError> {
        if self.values.len() != self.capacity {
            return Err(TableError::Configuration(format!(
                "{}: {} values appended, capacity is {}",
                self.array_name,
                self.values.len(),
                self.capacity
            )));
        }
        log::debug!(
            "table {} sealed with {} entries",
            self.array_name,
            self.values.len()
        );
        Ok(FilledTable {
            type_name: self.type_name,
            array_name: self.array_name,
            read_only: self.read_only,
            values: self.values,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    columns: usize,
    hex: bool,
    prepend: Option<String>,
}

impl RenderOptions {
    pub fn new(columns: usize, hex: bool, prepend: Option<String>) -> Result<Self, TableError> {
        if columns == 0 {
            return Err(TableError::Configuration(
                "columns per row must be > 0".into(),
            ));
        }
        Ok(Self {
            columns,
            hex,
            prepend,
        })
    }
}

/// A complete, immutable table. `render` consumes it, so each table is
/// rendered exactly once.
#[derive(Debug, PartialEq, Eq)]
pub struct FilledTable {
    type_name: String,
    array_name: String,
    read_only: bool,
    values: Vec<u8>,
}

impl FilledTable {
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn render(self, opts: &RenderOptions) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.values.len() / opts.columns + 4);

        if let Some(pre) = &opts.prepend {
            lines.extend(pre.lines().map(str::to_string));
        }

        let qualifier = if self.read_only { "static const" } else { "static" };
        lines.push(format!(
            "{qualifier} {} {}[{}] =",
            self.type_name,
            self.array_name,
            self.values.len()
        ));
        lines.push("{".to_string());

        let n_rows = self.values.len().div_ceil(opts.columns);
        for (i, row) in self.values.chunks(opts.columns).enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|&v| {
                    if opts.hex {
                        format!("0x{v:02X}")
                    } else {
                        v.to_string()
                    }
                })
                .collect();
            let sep = if i + 1 == n_rows { "" } else { "," };
            lines.push(format!("    {}{sep}", cells.join(", ")));
        }

        lines.push("};".to_string());
        lines
    }
}

/// Reads the array body of rendered table text back into values.
pub fn parse_rendered(text: &str) -> Result<Vec<u8>, TableError> {
    let open = text
        .find('{')
        .ok_or_else(|| TableError::Parse("missing '{'".into()))?;
    let close = text
        .rfind("};")
        .ok_or_else(|| TableError::Parse("missing '};'".into()))?;
    if close < open {
        return Err(TableError::Parse("'};' before '{'".into()));
    }

    let mut out = Vec::new();
    for cell in text[open + 1..close].split(',') {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        let parsed = match cell.strip_prefix("0x").or_else(|| cell.strip_prefix("0X")) {
            Some(hex) => u8::from_str_radix(hex, 16),
            None => cell.parse::<u8>(),
        };
        out.push(parsed.map_err(|e| TableError::Parse(format!("bad literal {cell:?}: {e}")))?);
    }
    Ok(out)
}
