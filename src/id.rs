#[cfg(not(feature = "std"))]
use core as std;

use std::{array, fmt, mem, ops, slice};

use crate::{Variant, Version};

/// Represents a Universally Unique IDentifier as a 16-byte big-endian array.
///
/// Equality, ordering, and hashing are all defined over the byte array: two UUIDs compare in
/// lexicographic order of their bytes, starting from index 0.
///
/// # Examples
///
/// ```rust
/// use uuid128::{Uuid, Variant, Version};
///
/// let x = Uuid::from_bytes([
///     0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0x4d, 0xef, 0x81, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef,
/// ]);
/// assert_eq!(x.variant(), Variant::Rfc4122);
/// assert_eq!(x.version(), Version::RandomNumberBased);
/// assert_eq!(x[6], 0x4d);
/// assert!(Uuid::nil() < x);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[repr(transparent)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Number of octets in a UUID.
    pub const SIZE: usize = 16;

    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates a UUID from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the Nil UUID, whose 16 bytes are all zero.
    pub const fn nil() -> Self {
        Self::NIL
    }

    /// Returns the number of octets, which is always [`Uuid::SIZE`].
    pub const fn size(&self) -> usize {
        Self::SIZE
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a mutable reference to the underlying byte array.
    pub fn as_bytes_mut(&mut self) -> &mut [u8; 16] {
        &mut self.0
    }

    /// Consumes the UUID and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns an iterator over the bytes in index order.
    pub fn iter(&self) -> slice::Iter<'_, u8> {
        self.0.iter()
    }

    /// Returns an iterator that allows modifying each byte in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, u8> {
        self.0.iter_mut()
    }

    /// Returns `true` if all the 16 bytes are zero.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Returns `true` if all the 16 bytes are `0xff`.
    pub const fn is_max(&self) -> bool {
        u128::from_be_bytes(self.0) == u128::MAX
    }

    /// Returns the variant field encoded in byte 8.
    ///
    /// See [`Variant::from_octet()`] for the bit patterns.
    pub const fn variant(&self) -> Variant {
        Variant::from_octet(self.0[8])
    }

    /// Returns the version field encoded in the high nibble of byte 6.
    ///
    /// See [`Version::from_octet()`] for the mapping.
    pub const fn version(&self) -> Version {
        Version::from_octet(self.0[6])
    }

    /// Exchanges the contents of two UUIDs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid128::Uuid;
    ///
    /// let mut x = Uuid::NIL;
    /// let mut y = Uuid::MAX;
    /// x.swap(&mut y);
    /// assert_eq!((x, y), (Uuid::MAX, Uuid::NIL));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.0, &mut other.0);
    }
}

/// Exchanges the contents of two UUIDs.
///
/// This is equivalent to [`Uuid::swap()`].
pub fn swap(a: &mut Uuid, b: &mut Uuid) {
    a.swap(b)
}

impl<I: slice::SliceIndex<[u8]>> ops::Index<I> for Uuid {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.0[index]
    }
}

impl<I: slice::SliceIndex<[u8]>> ops::IndexMut<I> for Uuid {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<'a> IntoIterator for &'a Uuid {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Uuid {
    type Item = &'a mut u8;
    type IntoIter = slice::IterMut<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl IntoIterator for Uuid {
    type Item = u8;
    type IntoIter = array::IntoIter<u8, 16>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = LengthError;

    /// Creates an object from a byte slice of exactly 16 bytes.
    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| LengthError { len: src.len() })
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsMut<[u8]> for Uuid {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// Error converting a byte slice whose length is not 16 into a UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LengthError {
    len: usize,
}

impl LengthError {
    /// Returns the length of the rejected slice.
    pub const fn actual_len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid length: expected {} bytes, found {}",
            Uuid::SIZE,
            self.len
        )
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{LengthError, Uuid};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{BuildHasher, BuildHasherDefault};

    impl Uuid {
        /// Returns the hash code of the 16 bytes computed by the standard library's default
        /// hasher with fixed keys.
        ///
        /// Equal UUIDs always produce the same hash code.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use uuid128::Uuid;
        ///
        /// let x = Uuid::from(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef_u128);
        /// let y = Uuid::from(*x.as_bytes());
        /// assert_eq!(x.hash_code(), y.hash_code());
        /// assert_ne!(x.hash_code(), Uuid::NIL.hash_code());
        /// ```
        pub fn hash_code(&self) -> u64 {
            BuildHasherDefault::<DefaultHasher>::default().hash_one(self)
        }
    }

    impl std::error::Error for LengthError {}
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_bytes(self.as_bytes())
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_bytes(VisitorImpl)
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "16 bytes of a UUID")
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::try_from(value)
                .map_err(|_| de::Error::invalid_length(value.len(), &self))
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut bytes = [0u8; 16];
            for (i, e) in bytes.iter_mut().enumerate() {
                *e = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            }
            if seq.next_element::<de::IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_length(bytes.len() + 1, &self));
            }
            Ok(Self::Value::from(bytes))
        }
    }

}
