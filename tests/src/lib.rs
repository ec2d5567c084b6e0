//! Cross-crate tests for `arpscout`. Everything lives behind `cfg(test)`.

#[cfg(test)]
mod discovery;
#[cfg(test)]
mod expansion;
#[cfg(test)]
mod oui;
