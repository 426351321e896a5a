pub mod errors;
pub mod db;
pub mod locality;
pub mod seller;

#[cfg(test)]
mod tests;
