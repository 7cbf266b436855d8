use core::{fmt, marker::PhantomData};

use serde::{
    de,
    de::{MapAccess, SeqAccess, Visitor},
    ser::{SerializeStruct, SerializeTuple},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::HiLo;

/// A `serde_support` impl
impl<T: Serialize> Serialize for HiLo<T> {
    /// Serializes `self` in a platform independent way. In human readable form,
    /// it serializes into a struct named "HiLo" with two fields "lo" and "hi"
    /// holding the words as ordinary integers. In other forms it serializes
    /// into a `(lo, hi)` tuple.
    ///
    /// ```
    /// // Example using the `ron` crate. Note that it
    /// // omits the struct name which would be "HiLo".
    /// use hilo_core::HiLo;
    /// use ron::to_string;
    ///
    /// let x = HiLo::<u32>::new(1, 0xfedc);
    /// assert_eq!(to_string(&x).unwrap(), "(lo:65244,hi:1)");
    /// ```
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            let mut s = serializer.serialize_struct("HiLo", 2)?;
            s.serialize_field("lo", &self.lo)?;
            s.serialize_field("hi", &self.hi)?;
            s.end()
        } else {
            let mut s = serializer.serialize_tuple(2)?;
            s.serialize_element(&self.lo)?;
            s.serialize_element(&self.hi)?;
            s.end()
        }
    }
}

const FIELDS: &[&str] = &["lo", "hi"];

/// Helper for the deserialization impl
enum Field {
    Lo,
    Hi,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("`lo` or `hi`")
            }

            fn visit_str<E>(self, value: &str) -> Result<Field, E>
            where
                E: de::Error,
            {
                match value {
                    "lo" => Ok(Field::Lo),
                    "hi" => Ok(Field::Hi),
                    _ => Err(de::Error::unknown_field(value, FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

struct HiLoVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for HiLoVisitor<T> {
    type Value = HiLo<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("struct HiLo consisting of a low word \"lo\" and a high word \"hi\"")
    }

    fn visit_map<V>(self, mut map: V) -> Result<HiLo<T>, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut lo: Option<T> = None;
        let mut hi: Option<T> = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Lo => {
                    if lo.is_some() {
                        return Err(de::Error::duplicate_field("lo"))
                    }
                    lo = Some(map.next_value()?);
                }
                Field::Hi => {
                    if hi.is_some() {
                        return Err(de::Error::duplicate_field("hi"))
                    }
                    hi = Some(map.next_value()?);
                }
            }
        }
        let lo = lo.ok_or_else(|| de::Error::missing_field("lo"))?;
        let hi = hi.ok_or_else(|| de::Error::missing_field("hi"))?;
        Ok(HiLo { lo, hi })
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<HiLo<T>, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let lo: T = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let hi: T = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        Ok(HiLo { lo, hi })
    }
}

/// A `serde_support` impl
impl<'de, T: Deserialize<'de>> Deserialize<'de> for HiLo<T> {
    /// Deserializes `self` in a platform independent way.
    ///
    /// ```
    /// // Example using the `ron` crate. Note that it
    /// // omits the struct name which would be "HiLo".
    /// use hilo_core::HiLo;
    /// use ron::from_str;
    ///
    /// let x: HiLo<i8> = from_str("(lo:-128,hi:-1)").unwrap();
    /// assert_eq!(x.to_wide(), -128i16);
    /// ```
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_struct("HiLo", FIELDS, HiLoVisitor(PhantomData))
        } else {
            deserializer.deserialize_tuple(2, HiLoVisitor(PhantomData))
        }
    }
}
