use bytes::{Buf, BufMut};
use commonware_codec::{Error, ReadExt, Write};

use super::MAX_COMMAND_LENGTH;

/// Write a command name as length-prefixed UTF-8 bytes.
pub fn write_command(command: &str, writer: &mut impl BufMut) {
    let bytes = command.as_bytes();
    (bytes.len() as u32).write(writer);
    writer.put_slice(bytes);
}

/// Read a command name from length-prefixed UTF-8 bytes. Rejects names
/// longer than [`MAX_COMMAND_LENGTH`] before allocating.
pub fn read_command(reader: &mut impl Buf) -> Result<String, Error> {
    let len = u32::read(reader)? as usize;
    if len > MAX_COMMAND_LENGTH {
        return Err(Error::Invalid("Command", "too long"));
    }
    if reader.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    let mut bytes = vec![0u8; len];
    reader.copy_to_slice(&mut bytes);
    String::from_utf8(bytes).map_err(|_| Error::Invalid("Command", "invalid UTF-8"))
}

/// Encoded size of a command name.
pub fn command_encode_size(command: &str) -> usize {
    4 + command.len()
}
