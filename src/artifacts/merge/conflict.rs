use bytes::{BufMut, Bytes, BytesMut};

const CURRENT_MARKER: &[u8] = b"<<<<<<< HEAD\n";
const SEPARATOR_MARKER: &[u8] = b"=======\n";
const TARGET_MARKER: &[u8] = b">>>>>>>\n";

/// Content for a path both sides changed; a deleted side contributes nothing
pub fn render_conflict(current: Option<&[u8]>, target: Option<&[u8]>) -> Bytes {
    let current = current.unwrap_or_default();
    let target = target.unwrap_or_default();

    let mut content = BytesMut::with_capacity(
        CURRENT_MARKER.len()
            + current.len()
            + SEPARATOR_MARKER.len()
            + target.len()
            + TARGET_MARKER.len(),
    );
    content.put_slice(CURRENT_MARKER);
    content.put_slice(current);
    content.put_slice(SEPARATOR_MARKER);
    content.put_slice(target);
    content.put_slice(TARGET_MARKER);

    content.freeze()
}
