#[cfg(test)]
mod firing;
