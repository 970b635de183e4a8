pub mod errors;
pub mod db;
pub mod contact;

#[cfg(test)]
mod tests;
