//! Pod-shaped fixture records shared by store and query tests.

use crate::{
    store::{IndexName, IndexRegistry},
    traits::{FieldValues, RecordIdentity},
    value::Value,
};
use std::collections::BTreeMap;

#[derive(Debug)]
pub(crate) struct Pod {
    pub name: String,
    pub namespace: String,
    pub node: String,
    pub ip: String,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
    pub spec: PodSpec,
}

#[derive(Debug)]
pub(crate) struct PodSpec {
    pub containers: Vec<Container>,
}

#[derive(Debug)]
pub(crate) struct Container {
    pub name: String,
    pub image: String,
}

impl FieldValues for Pod {
    fn get_value(&self, field: &str) -> Option<Value<'_>> {
        match field {
            "name" => Some(Value::Text(&self.name)),
            "namespace" => Some(Value::Text(&self.namespace)),
            "node" => Some(Value::Text(&self.node)),
            "ip" => Some(Value::Text(&self.ip)),
            "labels" => Some(Value::Map(&self.labels)),
            "annotations" => Some(Value::Map(&self.annotations)),
            "spec" => Some(Value::Record(&self.spec)),
            _ => None,
        }
    }
}

impl FieldValues for PodSpec {
    fn get_value(&self, field: &str) -> Option<Value<'_>> {
        match field {
            "containers" => Some(Value::records(&self.containers)),
            _ => None,
        }
    }
}

impl FieldValues for Container {
    fn get_value(&self, field: &str) -> Option<Value<'_>> {
        match field {
            "name" => Some(Value::Text(&self.name)),
            "image" => Some(Value::Text(&self.image)),
            _ => None,
        }
    }
}

impl RecordIdentity for Pod {
    fn record_key(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.namespace, self.name)
        }
    }
}

pub(crate) fn pod(name: &str, labels: &[(&str, &str)], image: &str) -> Pod {
    let containers = if image.is_empty() {
        Vec::new()
    } else {
        vec![Container {
            name: format!("{name}-0"),
            image: image.to_string(),
        }]
    };

    Pod {
        name: name.to_string(),
        namespace: "default".to_string(),
        node: String::new(),
        ip: String::new(),
        labels: labels
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
        annotations: BTreeMap::new(),
        spec: PodSpec { containers },
    }
}

pub(crate) fn pod_registry() -> IndexRegistry<Pod> {
    IndexRegistry::new()
        .with(IndexName::Name, |pod: &Pod| vec![pod.name.clone()])
        .with(IndexName::Label, |pod: &Pod| {
            pod.labels.iter().map(|(k, v)| format!("{k}={v}")).collect()
        })
        .with(IndexName::Annotation, |pod: &Pod| {
            pod.annotations
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect()
        })
        .with(IndexName::Image, |pod: &Pod| {
            pod.spec
                .containers
                .iter()
                .map(|container| container.image.clone())
                .collect()
        })
        .with(IndexName::Node, |pod: &Pod| {
            if pod.node.is_empty() {
                Vec::new()
            } else {
                vec![pod.node.clone()]
            }
        })
        .with(IndexName::Address, |pod: &Pod| {
            if pod.ip.is_empty() {
                Vec::new()
            } else {
                vec![pod.ip.clone()]
            }
        })
}
