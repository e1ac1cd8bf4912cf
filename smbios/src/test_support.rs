//! Builders for synthetic structure tables used by unit tests.

/// Encodes one structure: header, `body` (the bytes after the handle) and
/// its string set.
pub fn record(table_ty: u8, handle: u16, body: &[u8], strings: &[&str]) -> Vec<u8> {
    let length = (body.len() + 4) as u8;
    let mut v = vec![table_ty, length];
    v.extend_from_slice(&handle.to_le_bytes());
    v.extend_from_slice(body);
    if strings.is_empty() {
        v.extend_from_slice(&[0, 0]);
    } else {
        for s in strings {
            v.extend_from_slice(s.as_bytes());
            v.push(0);
        }
        v.push(0);
    }
    v
}

pub fn end_of_table(handle: u16) -> Vec<u8> {
    record(127, handle, &[], &[])
}
