//! Decode a domain type from a value tree and map it back out.

use interchange_mapper::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Priority {
    Low,
    High,
}

impl RawRepresentable for Priority {
    type Raw = String;

    fn from_raw(raw: String) -> Option<Self> {
        match raw.as_str() {
            "low" => Some(Self::Low),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    fn raw(&self) -> String {
        match self {
            Self::Low => "low".to_owned(),
            Self::High => "high".to_owned(),
        }
    }
}

#[derive(Debug)]
struct Task {
    title: String,
    priority: Priority,
    tags: Vec<String>,
    estimate: Option<i64>,
}

impl Mappable for Task {
    fn from_map(map: &Mapper<'_>) -> MapResult<Self> {
        Ok(Self {
            title: map.from("title")?,
            priority: map.from_raw("priority")?,
            tags: map.array_from("tags")?,
            estimate: map.optional_from("estimate"),
        })
    }
}

impl OutMappable for Task {
    fn out_map<M: OutMap>(&self, map: &mut OutMapper<M>) -> MapResult<()> {
        map.set_string(self.title.clone(), "title")?;
        map.set_string(self.priority.raw(), "priority")?;
        if let Some(estimate) = self.estimate {
            map.set_int(estimate, "estimate")?;
        }
        Ok(())
    }
}

fn main() -> Result<(), MapError> {
    let subject: Value = r#"{
        "title": "write the decoder",
        "priority": "high",
        "tags": ["mapper", 7, "demo"]
    }"#
    .parse()
    .map_err(MapError::from)?;

    let task = Task::from_map(&Mapper::new(&subject))?;
    println!("{task:?}");
    // The malformed tag was dropped, not fatal:
    assert_eq!(task.tags, ["mapper", "demo"]);
    assert_eq!(task.estimate, None);

    let out: Value = task.map_to()?;
    println!("{out}");

    Ok(())
}
