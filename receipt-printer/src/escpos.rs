//! ESC/POS command builder
//!
//! Chainable builder over a byte buffer. Text is written as UTF-8.

const ESC: u8 = 0x1B;
const GS: u8 = 0x1D;

/// `GS ( k` prefix shared by every QR function
const QR_PREFIX: [u8; 3] = [GS, 0x28, 0x6B];

/// Byte limit of the QR symbol store (model 2, level L)
const QR_MAX_BYTES: usize = 7089;

/// Display width of a string in printer columns
///
/// Counts characters, so multi-byte UTF-8 text lines up the same as ASCII.
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Horizontal justification (`ESC a n`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left = 0,
    Center = 1,
    Right = 2,
}

/// Character magnification (`GS ! n`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Normal = 0x00,
    DoubleHeight = 0x01,
    DoubleWidth = 0x10,
    Double = 0x11,
}

#[derive(Debug, Clone)]
pub struct EscPosBuilder {
    buf: Vec<u8>,
    width: usize,
}

impl EscPosBuilder {
    /// Start a ticket for paper `width` characters wide
    ///
    /// 58mm paper holds 32 characters, 80mm paper 48. The buffer opens
    /// with `ESC @` so leftover printer state is reset.
    pub fn new(width: usize) -> Self {
        let mut b = Self::fragment(width);
        b.buf.extend_from_slice(&[ESC, 0x40]);
        b
    }

    /// Builder without the leading initialize command
    ///
    /// For command fragments spliced into another ticket with [`raw`](Self::raw).
    pub fn fragment(width: usize) -> Self {
        Self {
            buf: Vec::with_capacity(512),
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    // === Text ===

    pub fn text(&mut self, s: &str) -> &mut Self {
        self.raw(s.as_bytes())
    }

    pub fn line(&mut self, s: &str) -> &mut Self {
        self.text(s).newline()
    }

    pub fn newline(&mut self) -> &mut Self {
        self.raw(b"\n")
    }

    /// Print buffer and feed `lines` lines (`ESC d n`)
    pub fn feed(&mut self, lines: u8) -> &mut Self {
        self.raw(&[ESC, 0x64, lines])
    }

    // === Style ===

    pub fn align(&mut self, align: Align) -> &mut Self {
        self.raw(&[ESC, 0x61, align as u8])
    }

    /// Emphasis on or off (`ESC E n`)
    pub fn bold(&mut self, on: bool) -> &mut Self {
        self.raw(&[ESC, 0x45, u8::from(on)])
    }

    pub fn size(&mut self, size: TextSize) -> &mut Self {
        self.raw(&[GS, 0x21, size as u8])
    }

    // === Layout ===

    /// Full-width rule made of `ch`
    pub fn rule(&mut self, ch: char) -> &mut Self {
        let rule: String = std::iter::repeat_n(ch, self.width).collect();
        self.line(&rule)
    }

    /// `left` and `right` on one line, padded to the paper width
    ///
    /// When both do not fit they are printed one space apart and the
    /// printer wraps.
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let gap = self
            .width
            .checked_sub(text_width(left) + text_width(right))
            .filter(|gap| *gap > 0)
            .unwrap_or(1);

        self.text(left);
        self.text(&" ".repeat(gap));
        self.line(right)
    }

    // === Paper ===

    /// Full cut (`GS V 0`)
    pub fn cut(&mut self) -> &mut Self {
        self.raw(&[GS, 0x56, 0x00])
    }

    // === QR Code ===

    /// Store and print a QR symbol (model 2, error correction L)
    ///
    /// `module` is the dot size of one module, clamped to 1..=16. Payloads
    /// over the 7089 byte store limit are truncated.
    pub fn qr_code(&mut self, data: &str, module: u8) -> &mut Self {
        let data = &data.as_bytes()[..data.len().min(QR_MAX_BYTES)];
        let store_len = data.len() + 3;

        self.qr_function(&[0x04, 0x00, 0x31, 0x41, 0x32, 0x00]) // model 2
            .qr_function(&[0x03, 0x00, 0x31, 0x43, module.clamp(1, 16)]) // module size
            .qr_function(&[0x03, 0x00, 0x31, 0x45, 0x30]) // level L
            .qr_function(&[
                (store_len & 0xFF) as u8,
                ((store_len >> 8) & 0xFF) as u8,
                0x31,
                0x50,
                0x30,
            ])
            .raw(data)
            .qr_function(&[0x03, 0x00, 0x31, 0x51, 0x30]) // print
    }

    fn qr_function(&mut self, params: &[u8]) -> &mut Self {
        self.raw(&QR_PREFIX).raw(params)
    }

    // === Raw ===

    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for EscPosBuilder {
    fn default() -> Self {
        Self::new(48)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(b: EscPosBuilder) -> String {
        String::from_utf8_lossy(&b.build()[2..]).to_string()
    }

    #[test]
    fn test_builder_starts_with_init() {
        let mut b = EscPosBuilder::new(32);
        b.align(Align::Center)
            .size(TextSize::Double)
            .line("Insyllium")
            .size(TextSize::Normal);

        let data = b.build();
        assert_eq!(&data[..5], &[ESC, 0x40, ESC, 0x61, 0x01]);
        assert!(String::from_utf8_lossy(&data).contains("Insyllium\n"));
    }

    #[test]
    fn test_style_bytes() {
        let mut b = EscPosBuilder::fragment(32);
        b.bold(true)
            .bold(false)
            .size(TextSize::DoubleHeight)
            .align(Align::Right);

        assert_eq!(
            b.build(),
            [ESC, 0x45, 1, ESC, 0x45, 0, GS, 0x21, 0x01, ESC, 0x61, 0x02]
        );
    }

    #[test]
    fn test_line_lr_fills_width() {
        let mut b = EscPosBuilder::new(20);
        b.line_lr("Coffee", "$2.50");
        assert_eq!(body(b), "Coffee         $2.50\n");
    }

    #[test]
    fn test_line_lr_overflow_keeps_both_sides() {
        let mut b = EscPosBuilder::new(10);
        b.line_lr("Croissant au beurre", "$3.10");
        assert_eq!(body(b), "Croissant au beurre $3.10\n");

        let mut b = EscPosBuilder::new(10);
        b.line_lr("Tea", "$1.0000");
        assert_eq!(body(b), "Tea $1.0000\n");
    }

    #[test]
    fn test_rules() {
        let mut b = EscPosBuilder::new(10);
        b.rule('=').rule('-');
        assert_eq!(body(b), "==========\n----------\n");
    }

    #[test]
    fn test_qr_code_framing() {
        let mut b = EscPosBuilder::fragment(32);
        b.qr_code("https://example.com", 40);

        let data = b.build();
        assert_eq!(&data[..3], &QR_PREFIX);
        // Module size clamped to 16
        let size_cmd = [GS, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x43, 16];
        assert!(data.windows(size_cmd.len()).any(|w| w == size_cmd));
        // 19 payload bytes + 3
        let store_cmd = [GS, 0x28, 0x6B, 22, 0x00, 0x31, 0x50, 0x30];
        assert!(data.windows(store_cmd.len()).any(|w| w == store_cmd));
        assert!(data.ends_with(&[GS, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x51, 0x30]));
    }

    #[test]
    fn test_text_width_counts_chars() {
        assert_eq!(text_width("Café"), 4);
        assert_eq!(text_width(""), 0);
    }
}
