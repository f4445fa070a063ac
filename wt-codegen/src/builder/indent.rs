//! Indentation configuration for code generation.

/// Indentation width, in spaces, for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub u8);

impl Indent {
    /// 2-space indentation, the usual style for `.d.ts` files.
    pub const TYPESCRIPT: Self = Self(2);

    /// Write `level` indentation units into `buffer`.
    pub fn write_to(&self, buffer: &mut String, level: usize) {
        buffer.extend(std::iter::repeat_n(' ', level * usize::from(self.0)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_spaces() {
        let mut buffer = String::new();
        Indent::TYPESCRIPT.write_to(&mut buffer, 3);
        assert_eq!(buffer, "      ");
    }

    #[test]
    fn test_level_zero_writes_nothing() {
        let mut buffer = String::new();
        Indent(4).write_to(&mut buffer, 0);
        assert!(buffer.is_empty());
    }
}
