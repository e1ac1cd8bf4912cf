use super::error::Error;

/// Strings trailing one structure, referenced by 1-based index.
///
/// Only the region and the number of strings are kept; each lookup
/// re-splits the borrowed bytes, so no string is ever copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringTable<'a> {
    region: &'a [u8],
    count: usize,
}

impl<'a> StringTable<'a> {
    /// Scans the string set starting at `start` and returns it together with
    /// the offset just past its terminator.
    ///
    /// A structure without strings ends with `00 00`; otherwise every string
    /// is NUL terminated and one extra NUL closes the set.
    pub fn extract(buf: &'a [u8], start: usize) -> Result<(Self, usize), Error> {
        let truncated = Error::Truncated { offset: start };

        if let Some([0, 0]) = buf.get(start..start + 2) {
            let table = StringTable {
                region: &buf[start..start],
                count: 0,
            };
            return Ok((table, start + 2));
        }

        let mut count = 0;
        let mut pos = start;
        loop {
            let rest = buf.get(pos..).ok_or(Error::Truncated { offset: start })?;
            let nul = match rest.iter().position(|&c| c == 0) {
                Some(nul) => nul,
                None => return Err(truncated),
            };
            count += 1;
            pos += nul + 1;

            match buf.get(pos) {
                Some(0) => {
                    let table = StringTable {
                        region: &buf[start..pos],
                        count,
                    };
                    return Ok((table, pos + 1));
                }
                Some(_) => {}
                None => return Err(truncated),
            }
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn get(&self, index: u8) -> Option<&'a [u8]> {
        if index < 1 {
            return None;
        }

        self.iter().nth((index as usize) - 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> {
        let region = self.region;
        region
            .split(|&c| c == 0)
            .take(self.count)
    }
}
