//! Metric descriptors, samples and the Prometheus text renderer.
//!
//! Every series is described by its own `MetricDesc` carrying constant
//! labels, so a family is simply all descriptors sharing one `fq_name`.
//! The renderer groups samples by family in first-seen order and prints one
//! `# HELP`/`# TYPE` header per family.

use std::fmt::Write;
use std::sync::Arc;

/// Content type of the text exposition format rendered here.
pub const TEXT_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

/// Join namespace and name the way client libraries do (`ns_name`).
pub fn fq_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}_{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDesc {
    pub fq_name: String,
    pub help: String,
    pub kind: MetricKind,
    pub const_labels: Vec<(String, String)>,
}

impl MetricDesc {
    pub fn gauge(namespace: &str, name: &str, help: &str) -> Self {
        Self {
            fq_name: fq_name(namespace, name),
            help: help.to_string(),
            kind: MetricKind::Gauge,
            const_labels: Vec::new(),
        }
    }

    pub fn counter(namespace: &str, name: &str, help: &str) -> Self {
        Self {
            kind: MetricKind::Counter,
            ..Self::gauge(namespace, name, help)
        }
    }

    pub fn with_label(mut self, name: &str, value: &str) -> Self {
        self.const_labels.push((name.to_string(), value.to_string()));
        self
    }

    /// Label names in declaration order.
    pub fn label_names(&self) -> Vec<&str> {
        self.const_labels.iter().map(|(k, _)| k.as_str()).collect()
    }
}

/// One exported value.
#[derive(Debug, Clone)]
pub struct Sample {
    pub desc: Arc<MetricDesc>,
    pub value: f64,
}

impl Sample {
    pub fn new(desc: Arc<MetricDesc>, value: f64) -> Self {
        Self { desc, value }
    }
}

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

fn fmt_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".into()
    } else if v.is_infinite() {
        if v.is_sign_positive() { "+Inf".into() } else { "-Inf".into() }
    } else {
        v.to_string()
    }
}

/// Render samples in Prometheus text exposition format.
pub fn render(samples: &[Sample]) -> String {
    // family name -> samples, in first-seen order
    let mut families: Vec<(&str, Vec<&Sample>)> = Vec::new();
    for s in samples {
        match families.iter_mut().find(|(name, _)| *name == s.desc.fq_name) {
            Some((_, group)) => group.push(s),
            None => families.push((s.desc.fq_name.as_str(), vec![s])),
        }
    }

    let mut out = String::new();
    for (name, group) in families {
        let head = &group[0].desc;
        let _ = writeln!(out, "# HELP {} {}", name, escape_help(&head.help));
        let _ = writeln!(out, "# TYPE {} {}", name, head.kind.as_str());
        for s in group {
            if s.desc.const_labels.is_empty() {
                let _ = writeln!(out, "{} {}", name, fmt_value(s.value));
                continue;
            }
            let label_str = s
                .desc
                .const_labels
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, fmt_value(s.value));
        }
    }
    out
}
