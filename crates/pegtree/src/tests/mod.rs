
mod parse_bad;
mod position;
mod properties;
