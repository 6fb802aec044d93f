pub mod arbitrary;
pub mod scenario;

#[cfg(test)]
mod async_combinators;
#[cfg(test)]
mod laws;
