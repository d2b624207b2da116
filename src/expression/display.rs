//! Display formatting for product terms and sums of products

use super::{Notation, ProductTerm, SumOfProducts};
use std::fmt;

impl fmt::Display for ProductTerm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literals = self.literals();
        if literals.is_empty() {
            return write!(f, "1");
        }

        for (i, (label, positive)) in literals.iter().enumerate() {
            match self.notation {
                Notation::Prime => {
                    write!(f, "{}", label)?;
                    if !positive {
                        write!(f, "'")?;
                    }
                }
                Notation::Latex => {
                    write!(f, "{}", label)?;
                    if !positive {
                        write!(f, "^{{\\prime}}")?;
                    }
                }
                Notation::Operator => {
                    if i > 0 {
                        write!(f, " * ")?;
                    }
                    if !positive {
                        write!(f, "~")?;
                    }
                    write!(f, "{}", label)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for SumOfProducts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }
        write!(f, "{}", self.terms().join(" + "))
    }
}
