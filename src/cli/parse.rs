use graphstep_core::format::OutputFormat;
use graphstep_core::graph::{VertexId, Weight};

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// An edge as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Option<Weight>,
}

/// Parse `FROM:TO` or `FROM:TO:WEIGHT`
pub fn parse_edge(s: &str) -> std::result::Result<EdgeSpec, String> {
    let parts: Vec<&str> = s.split(':').map(str::trim).collect();
    let (from, to, weight) = match parts.as_slice() {
        [from, to] => (*from, *to, None),
        [from, to, weight] => (*from, *to, Some(*weight)),
        _ => return Err(format!("expected FROM:TO[:WEIGHT], got '{}'", s)),
    };

    let vertex = |part: &str| {
        part.parse::<u32>()
            .map(VertexId::new)
            .map_err(|_| format!("invalid vertex id '{}' in edge '{}'", part, s))
    };
    let weight = weight
        .map(|w| {
            w.parse::<Weight>()
                .map_err(|_| format!("invalid weight '{}' in edge '{}'", w, s))
        })
        .transpose()?;

    Ok(EdgeSpec {
        from: vertex(from)?,
        to: vertex(to)?,
        weight,
    })
}
