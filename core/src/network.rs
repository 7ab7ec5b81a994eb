pub mod tcp;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;
