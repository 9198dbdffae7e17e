//! Glyphs used across widgets.
//!
//! `IconSet::new(true)` swaps every glyph for plain ASCII, which dumb
//! terminals render reliably.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    ascii: bool,
}

impl IconSet {
    pub fn new(ascii: bool) -> Self {
        Self { ascii }
    }

    pub fn is_ascii(&self) -> bool {
        self.ascii
    }

    pub fn logo(&self) -> &'static str {
        if self.ascii {
            "*"
        } else {
            "\u{2387}" // ⎇
        }
    }

    pub fn checked(&self) -> &'static str {
        if self.ascii {
            "[x]"
        } else {
            "\u{2611}" // ☑
        }
    }

    pub fn unchecked(&self) -> &'static str {
        if self.ascii {
            "[ ]"
        } else {
            "\u{2610}" // ☐
        }
    }

    pub fn step_done(&self) -> &'static str {
        if self.ascii {
            "+"
        } else {
            "\u{2713}" // ✓
        }
    }

    pub fn step_current(&self) -> &'static str {
        if self.ascii {
            ">"
        } else {
            "\u{25cf}" // ●
        }
    }

    pub fn step_pending(&self) -> &'static str {
        if self.ascii {
            "o"
        } else {
            "\u{25cb}" // ○
        }
    }

    pub fn arrow(&self) -> &'static str {
        if self.ascii {
            "->"
        } else {
            "\u{2192}" // →
        }
    }

    pub fn expanded(&self) -> &'static str {
        if self.ascii {
            "v"
        } else {
            "\u{25be}" // ▾
        }
    }

    pub fn collapsed(&self) -> &'static str {
        if self.ascii {
            ">"
        } else {
            "\u{25b8}" // ▸
        }
    }

    pub fn warning(&self) -> &'static str {
        if self.ascii {
            "!"
        } else {
            "\u{26a0}" // ⚠
        }
    }

    pub fn search(&self) -> &'static str {
        if self.ascii {
            "?"
        } else {
            "\u{2315}" // ⌕
        }
    }

    pub fn particle(&self) -> &'static str {
        if self.ascii {
            "*"
        } else {
            "\u{2022}" // •
        }
    }
}
