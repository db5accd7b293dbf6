use std::collections::HashMap;

use crate::{error::ParseError, stream::Stream, PdfResult, Resolve};

#[derive(Debug, Clone, Copy)]
pub enum ObjectType {
    Null,
    Boolean,
    Integer,
    Real,
    String,
    Name,
    Array,
    Stream,
    Dictionary,
    Reference,
}

#[derive(Debug, Clone)]
pub enum Object {
    Null,
    True,
    False,
    Integer(i32),
    Real(f32),
    String(String),
    Name(String),
    Array(Vec<Self>),
    Stream(Stream),
    Dictionary(Dictionary),
    Reference(Reference),
}

/// A reference to a non-existing object is considered a `null`
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Reference {
    pub object_number: usize,
    pub generation: usize,
}

pub(crate) fn assert_len(arr: &[Object], len: usize) -> PdfResult<()> {
    if arr.len() != len {
        anyhow::bail!(ParseError::ArrayOfInvalidLength {
            expected: len,
            found: arr.to_vec(),
        });
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    dict: HashMap<String, Object>,
}

impl Dictionary {
    pub fn new(dict: HashMap<String, Object>) -> Self {
        Self { dict }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.dict.contains_key(key)
    }

    pub fn get_object(&mut self, key: &str) -> Option<Object> {
        self.dict.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }

    /// Errors if the dictionary's `Type` entry is present and does not match
    /// `ty`, or if `required` is set and the entry is missing
    pub fn expect_type(
        &mut self,
        ty: &'static str,
        resolver: &mut dyn Resolve,
        required: bool,
    ) -> PdfResult<()> {
        let found = match self.get_name("Type", resolver)? {
            Some(name) => name,
            None if required => anyhow::bail!(ParseError::MissingRequiredKey { key: "Type" }),
            None => return Ok(()),
        };

        if found != ty {
            anyhow::bail!(ParseError::MismatchedTypeKey {
                expected: ty,
                found,
            });
        }

        Ok(())
    }

    pub fn get_name(&mut self, key: &str, resolver: &mut dyn Resolve) -> PdfResult<Option<String>> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_name(obj))
            .transpose()
    }

    pub fn expect_name(
        &mut self,
        key: &'static str,
        resolver: &mut dyn Resolve,
    ) -> PdfResult<String> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_name(obj))
            .ok_or(ParseError::MissingRequiredKey { key })?
    }

    pub fn get_string(
        &mut self,
        key: &str,
        resolver: &mut dyn Resolve,
    ) -> PdfResult<Option<String>> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_string(obj))
            .transpose()
    }

    pub fn expect_string(
        &mut self,
        key: &'static str,
        resolver: &mut dyn Resolve,
    ) -> PdfResult<String> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_string(obj))
            .ok_or(ParseError::MissingRequiredKey { key })?
    }

    pub fn get_integer(&mut self, key: &str, resolver: &mut dyn Resolve) -> PdfResult<Option<i32>> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_integer(obj))
            .transpose()
    }

    pub fn expect_integer(
        &mut self,
        key: &'static str,
        resolver: &mut dyn Resolve,
    ) -> PdfResult<i32> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_integer(obj))
            .ok_or(ParseError::MissingRequiredKey { key })?
    }

    pub fn get_unsigned_integer(
        &mut self,
        key: &str,
        resolver: &mut dyn Resolve,
    ) -> PdfResult<Option<u32>> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_unsigned_integer(obj))
            .transpose()
    }

    pub fn expect_unsigned_integer(
        &mut self,
        key: &'static str,
        resolver: &mut dyn Resolve,
    ) -> PdfResult<u32> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_unsigned_integer(obj))
            .ok_or(ParseError::MissingRequiredKey { key })?
    }

    pub fn get_number(&mut self, key: &str, resolver: &mut dyn Resolve) -> PdfResult<Option<f32>> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_number(obj))
            .transpose()
    }

    pub fn expect_number(
        &mut self,
        key: &'static str,
        resolver: &mut dyn Resolve,
    ) -> PdfResult<f32> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_number(obj))
            .ok_or(ParseError::MissingRequiredKey { key })?
    }

    pub fn get_dict(
        &mut self,
        key: &str,
        resolver: &mut dyn Resolve,
    ) -> PdfResult<Option<Dictionary>> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_dict(obj))
            .transpose()
    }

    pub fn expect_dict(
        &mut self,
        key: &'static str,
        resolver: &mut dyn Resolve,
    ) -> PdfResult<Dictionary> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_dict(obj))
            .ok_or(ParseError::MissingRequiredKey { key })?
    }

    pub fn get_arr(
        &mut self,
        key: &str,
        resolver: &mut dyn Resolve,
    ) -> PdfResult<Option<Vec<Object>>> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_arr(obj))
            .transpose()
    }

    pub fn expect_arr(
        &mut self,
        key: &'static str,
        resolver: &mut dyn Resolve,
    ) -> PdfResult<Vec<Object>> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_arr(obj))
            .ok_or(ParseError::MissingRequiredKey { key })?
    }

    pub fn get_stream(
        &mut self,
        key: &str,
        resolver: &mut dyn Resolve,
    ) -> PdfResult<Option<Stream>> {
        self.dict
            .remove(key)
            .map(|obj| resolver.assert_stream(obj))
            .transpose()
    }
}
