pub mod btl_enmy_prm;
pub mod skill_tbl;

use byteorder::{ByteOrder, WriteBytesExt};

pub const HEADER_SIZE: usize = 8;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("truncated table: need {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("writing {table} is not supported")]
    UnsupportedWrite { table: &'static str },
}

/// A fixed-size record stored in a table file.
pub trait Entry: bytemuck::Pod {
    const FILE_NAME: &'static str;
    const MAGIC: &'static [u8; 4];
    const WRITABLE: bool = true;
}

/// A table file: 4 byte magic, little-endian `u32` count, then `count` records back to back.
#[derive(Clone, Debug, PartialEq)]
pub struct Table<E> {
    pub entries: Vec<E>,
}

impl<E> Table<E>
where
    E: Entry,
{
    pub fn new(entries: Vec<E>) -> Self {
        Self { entries }
    }

    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let header = buf.get(..HEADER_SIZE).ok_or(Error::Truncated {
            expected: HEADER_SIZE,
            actual: buf.len(),
        })?;

        if &header[..4] != E::MAGIC {
            log::warn!(
                "{}: unexpected magic {:02x?}, expected {:02x?}",
                E::FILE_NAME,
                &header[..4],
                E::MAGIC
            );
        }

        let count = byteorder::LittleEndian::read_u32(&header[4..]) as usize;
        let size = count
            .checked_mul(std::mem::size_of::<E>())
            .and_then(|n| n.checked_add(HEADER_SIZE))
            .ok_or(Error::Truncated {
                expected: usize::MAX,
                actual: buf.len(),
            })?;
        let body = buf.get(HEADER_SIZE..size).ok_or(Error::Truncated {
            expected: size,
            actual: buf.len(),
        })?;

        if buf.len() > size {
            log::debug!("{}: ignoring {} trailing bytes", E::FILE_NAME, buf.len() - size);
        }
        log::debug!("{}: {} entries", E::FILE_NAME, count);

        Ok(Self {
            entries: body
                .chunks_exact(std::mem::size_of::<E>())
                .map(|raw| bytemuck::pod_read_unaligned::<E>(raw))
                .collect(),
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        if !E::WRITABLE {
            return Err(Error::UnsupportedWrite { table: E::FILE_NAME });
        }

        let mut buf = Vec::with_capacity(HEADER_SIZE + self.entries.len() * std::mem::size_of::<E>());
        buf.extend_from_slice(E::MAGIC);
        // Writes to a Vec can't fail.
        let _ = buf.write_u32::<byteorder::LittleEndian>(self.entries.len() as u32);
        for entry in &self.entries {
            buf.extend_from_slice(bytemuck::bytes_of(entry));
        }
        Ok(buf)
    }
}
