mod flatfile;

pub use self::flatfile::*;
