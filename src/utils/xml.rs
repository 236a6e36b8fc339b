use quick_xml::se::Serializer;
use serde::Serialize;

const INDENT_SIZE: usize = 2;

/// Serializes `value` as indented XML. The root element takes the serde name
/// of the value's type; `None` fields are expected to be skipped by the type.
pub fn to_pretty_string<T: Serialize>(value: &T) -> Result<String, quick_xml::DeError> {
    let mut buf = String::new();

    let mut serializer = Serializer::new(&mut buf);
    serializer.indent(' ', INDENT_SIZE);
    value.serialize(serializer)?;

    Ok(buf)
}
