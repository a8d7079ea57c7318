//! Replies built directly in wire format, for datagrams that never made it
//! through the message decoder.

const HEADER_LEN: usize = 12;

const FLAG_QR: u8 = 0x80;
const MASK_OPCODE_RD: u8 = 0x79;
const RCODE_FORMERR: u8 = 0x01;

/// Builds a header-only FORMERR reply for an undecodable datagram.
///
/// The reply carries the datagram's ID, and its opcode and RD bit when the
/// flags byte is present. Returns `None` when even the 2-byte ID is missing.
pub fn build_format_error(datagram: &[u8]) -> Option<Vec<u8>> {
    if datagram.len() < 2 {
        return None;
    }

    let mut buf = vec![0u8; HEADER_LEN];
    buf[0] = datagram[0];
    buf[1] = datagram[1];
    buf[2] = FLAG_QR | datagram.get(2).map_or(0, |flags| flags & MASK_OPCODE_RD);
    buf[3] = RCODE_FORMERR;

    Some(buf)
}
