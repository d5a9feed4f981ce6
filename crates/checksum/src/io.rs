//! I/O adapters for checksum computation.
//!
//! [`ChecksumReader`] and [`ChecksumWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and compute a CRC over exactly the bytes
//! that were transferred, short reads and short writes included.
//!
//! A [`Digest`](crate::Digest) is itself a [`std::io::Write`] sink, so
//! `std::io::copy` can drive it directly when the data does not need to go
//! anywhere else.
//!
//! # Example
//!
//! ```rust
//! use std::io::{Cursor, Read};
//!
//! use checksum::{Checksum as _, Crc, catalog};
//!
//! let crc = Crc::<u16>::new(&catalog::CRC16_KERMIT);
//! let mut reader = crc.digest().reader(Cursor::new(b"hello world".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(contents, b"hello world");
//! assert_eq!(reader.crc(), crc.checksum(&contents));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{ChecksumReader, ChecksumWriter};
