//! ZPL command builder
//!
//! Provides a fluent API for building ZPL print data. Only the small
//! command subset the template compiler emits is covered.

use std::fmt::Write;

/// ZPL command builder
///
/// Accumulates one `^XA ... ^XZ` format as text.
pub struct ZplBuilder {
    buf: String,
}

impl ZplBuilder {
    /// Start a new format (`^XA`)
    pub fn new() -> Self {
        let mut buf = String::with_capacity(1024);
        buf.push_str("^XA");
        Self { buf }
    }

    /// Print width in dots (`^PW`)
    pub fn print_width(&mut self, dots: u32) -> &mut Self {
        let _ = write!(self.buf, "^PW{}", dots);
        self
    }

    /// Label length in dots (`^LL`)
    pub fn label_length(&mut self, dots: u32) -> &mut Self {
        let _ = write!(self.buf, "^LL{}", dots);
        self
    }

    /// UTF-8 encoding directive (`^CI28`)
    pub fn utf8(&mut self) -> &mut Self {
        self.buf.push_str("^CI28");
        self
    }

    /// Field origin at (x, y) dots (`^FO`)
    pub fn field_origin(&mut self, x: i32, y: i32) -> &mut Self {
        let _ = write!(self.buf, "^FO{},{}", x, y);
        self
    }

    /// Scalable font, height and width in dots (`^A0N`)
    pub fn font(&mut self, height: u32, width: u32) -> &mut Self {
        let _ = write!(self.buf, "^A0N,{},{}", height, width);
        self
    }

    /// Field data block (`^FD...^FS`)
    pub fn field_data(&mut self, text: &str) -> &mut Self {
        let _ = write!(self.buf, "^FD{}^FS", text);
        self
    }

    /// Data Matrix symbol (`^BXN`): module size in dots plus quality level
    pub fn data_matrix(&mut self, module: u32, quality: u32) -> &mut Self {
        let _ = write!(self.buf, "^BXN,{},{}", module, quality);
        self
    }

    /// End the format (`^XZ`) and return the command stream
    pub fn build(mut self) -> String {
        self.buf.push_str("^XZ");
        self.buf
    }
}

impl Default for ZplBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let mut b = ZplBuilder::new();
        b.print_width(464)
            .label_length(320)
            .utf8()
            .field_origin(10, 15)
            .font(20, 20)
            .field_data("hello");

        assert_eq!(
            b.build(),
            "^XA^PW464^LL320^CI28^FO10,15^A0N,20,20^FDhello^FS^XZ"
        );
    }

    #[test]
    fn test_data_matrix_command() {
        let mut b = ZplBuilder::new();
        b.field_origin(300, 150).data_matrix(5, 200).field_data("data");

        assert_eq!(b.build(), "^XA^FO300,150^BXN,5,200^FDdata^FS^XZ");
    }
}
