use core::fmt::{self, Display};
use core::str::FromStr;

use crate::error::{Error, Result};
use crate::vector2::Vector2;

/// Formats as '(x, y)'. Formatting flags such as precision are applied to each
/// component.
impl<T: Display> Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        self.x.fmt(f)?;
        write!(f, ", ")?;
        self.y.fmt(f)?;
        write!(f, ")")
    }
}

/// Parses '(x, y)' or 'x, y'. Whitespace around components is ignored.
impl<T: FromStr> FromStr for Vector2<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_vector(s).map_err(|e| {
            log::trace!("rejected vector {:?}: {}", s, e);
            e
        })
    }
}

fn parse_vector<T: FromStr>(s: &str) -> Result<Vector2<T>> {
    let s = s.trim();

    let inner = match (s.strip_prefix('('), s.ends_with(')')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => s,
        _ => return Err(Error::InvalidFormat),
    };

    let (x, y) = inner.split_once(',').ok_or(Error::InvalidFormat)?;
    if y.contains(',') {
        return Err(Error::InvalidFormat);
    }

    let x = x
        .trim()
        .parse()
        .map_err(|_| Error::InvalidComponent { component: "x" })?;
    let y = y
        .trim()
        .parse()
        .map_err(|_| Error::InvalidComponent { component: "y" })?;

    Ok(Vector2::new(x, y))
}
