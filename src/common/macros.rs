/// Declares the `Instruction` enum from `Variant = ordinal => "mnemonic"` rows.
///
/// Ordinals are written out explicitly so that editing the table can never
/// silently renumber an instruction. Rows must be listed in ordinal order.
macro_rules! instruction_set {
    [$($variant:ident = $ord:literal => $mnemonic:literal,)+] => {
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(u8)]
        pub enum Instruction {
            $($variant = $ord,)+
        }

        impl Instruction {
            /// Every instruction, in ordinal order.
            pub const ALL: &'static [Instruction] = &[$(Instruction::$variant,)+];

            #[must_use]
            pub const fn ordinal(self) -> u8 {
                self as u8
            }

            #[must_use]
            pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
                match ordinal {
                    $($ord => Some(Self::$variant),)+
                    _ => None,
                }
            }

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $mnemonic,)+
                }
            }

            #[must_use]
            pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
                match mnemonic {
                    $($mnemonic => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}
