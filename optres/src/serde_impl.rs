//! Serialization goes through the std shapes: an `Option` is a nullable value and a
//! `Result` is externally tagged (`{"Ok": v}` / `{"Err": e}`), so payloads written by
//! either side read back on the other.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::option::{None, Option, Some};
use crate::result::{Err, Ok, Result};

impl<T: Serialize> Serialize for Option<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match self {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Option<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        core::option::Option::<T>::deserialize(deserializer).map(Option::from)
    }
}

impl<T: Serialize, E: Serialize> Serialize for Result<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match self {
            Ok(value) => serializer.serialize_newtype_variant("Result", 0, "Ok", value),
            Err(error) => serializer.serialize_newtype_variant("Result", 1, "Err", error),
        }
    }
}

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for Result<T, E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        core::result::Result::<T, E>::deserialize(deserializer).map(Result::from)
    }
}
