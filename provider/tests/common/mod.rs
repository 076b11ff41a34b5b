#![allow(dead_code)]

use async_trait::async_trait;
use rack_provider::client::{
    ClientError, CreateStack, KeyValue, Publish, StackClient, StackDescription,
};
use rack_provider::{Config, Provider};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for CloudFormation and SNS
///
/// Created stacks become visible to later describe calls.
#[derive(Default)]
pub struct StubClient {
    stacks: Mutex<Vec<StackDescription>>,
    pub describes: Mutex<Vec<Option<String>>>,
    pub creates: Mutex<Vec<CreateStack>>,
    pub publishes: Mutex<Vec<Publish>>,
    fail_describe: Option<String>,
    fail_create: Option<String>,
    fail_publish: Option<String>,
}

impl StubClient {
    pub fn new(stacks: Vec<StackDescription>) -> Self {
        StubClient {
            stacks: Mutex::new(stacks),
            ..Default::default()
        }
    }

    pub fn failing_describe(mut self, message: &str) -> Self {
        self.fail_describe = Some(message.into());
        self
    }

    pub fn failing_create(mut self, message: &str) -> Self {
        self.fail_create = Some(message.into());
        self
    }

    pub fn failing_publish(mut self, message: &str) -> Self {
        self.fail_publish = Some(message.into());
        self
    }

    pub fn remote_calls(&self) -> usize {
        self.describes.lock().unwrap().len()
            + self.creates.lock().unwrap().len()
            + self.publishes.lock().unwrap().len()
    }
}

#[async_trait]
impl StackClient for StubClient {
    async fn describe_stacks(
        &self,
        name: Option<&str>,
    ) -> Result<Vec<StackDescription>, ClientError> {
        self.describes.lock().unwrap().push(name.map(String::from));

        if let Some(message) = &self.fail_describe {
            return Err(ClientError::Failed(message.clone()));
        }

        let stacks = self.stacks.lock().unwrap();

        match name {
            None => Ok(stacks.clone()),
            Some(name) => {
                let found: Vec<_> = stacks.iter().filter(|s| s.name == name).cloned().collect();

                if found.is_empty() {
                    Err(ClientError::NotFound(name.into()))
                } else {
                    Ok(found)
                }
            }
        }
    }

    async fn create_stack(&self, request: &CreateStack) -> Result<String, ClientError> {
        self.creates.lock().unwrap().push(request.clone());

        if let Some(message) = &self.fail_create {
            return Err(ClientError::Failed(message.clone()));
        }

        let mut stacks = self.stacks.lock().unwrap();

        if stacks.iter().any(|s| s.name == request.name) {
            return Err(ClientError::Failed(format!(
                "Stack [{}] already exists",
                request.name
            )));
        }

        stacks.push(StackDescription {
            name: request.name.clone(),
            status: "CREATE_IN_PROGRESS".into(),
            status_reason: "User Initiated".into(),
            outputs: vec![],
            parameters: request.parameters.clone(),
            tags: request.tags.clone(),
        });

        Ok(format!(
            "arn:aws:cloudformation:us-east-1:990037048036:stack/{}/cd77a770-7059-11e6-9f55-50fa5f2588d2",
            request.name
        ))
    }

    async fn publish(&self, request: &Publish) -> Result<String, ClientError> {
        self.publishes.lock().unwrap().push(request.clone());

        match &self.fail_publish {
            Some(message) => Err(ClientError::Failed(message.clone())),
            None => Ok("94f20ce6-13c5-43a0-9a9e-ca52d816e90b".into()),
        }
    }
}

pub fn config() -> Config {
    Config::new("convox", "notifications.example.org")
}

/// Provider over the stub with event timestamps left unknown
pub fn provider(client: &Arc<StubClient>) -> Provider {
    Provider::new(config(), client.clone()).with_clock(|| None)
}

pub fn kv(pairs: &[(&str, &str)]) -> Vec<KeyValue> {
    pairs.iter().map(|(k, v)| KeyValue::new(*k, *v)).collect()
}

pub fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn syslog_outputs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Url", "tcp+tls://logs1.example.com:11235"),
        ("HttpdLink", "convox-httpd-LogGroup-12345678"),
        ("Httpd2Link", ""),
    ]
}

/// Log sink registered as a service, linking the httpd app
pub fn syslog_stack() -> StackDescription {
    StackDescription {
        name: "syslog".into(),
        status: "UPDATE_COMPLETE".into(),
        status_reason: "".into(),
        outputs: kv(&syslog_outputs()),
        parameters: vec![],
        tags: kv(&[
            ("Type", "service"),
            ("Name", "syslog"),
            ("System", "convox"),
            ("Rack", "convox"),
        ]),
    }
}

/// Log sink created by the rack as a resource
pub fn papertrail_stack() -> StackDescription {
    StackDescription {
        name: "convox-papertrail".into(),
        status: "CREATE_COMPLETE".into(),
        status_reason: "".into(),
        outputs: kv(&[
            ("Url", "udp://logs.papertrailapp.com:11235"),
            ("WorkerLink", "convox-worker-LogGroup-ABCDEFGH"),
        ]),
        parameters: kv(&[("Url", "udp://logs.papertrailapp.com:11235")]),
        tags: kv(&[
            ("Name", "papertrail"),
            ("Rack", "convox"),
            ("Resource", "papertrail"),
            ("System", "convox"),
            ("Type", "resource"),
        ]),
    }
}

pub fn httpd_outputs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("WebPort80BalancerName", "httpd-web-7E5UPCM"),
        (
            "BalancerWebHost",
            "httpd-web-7E5UPCM-1241527783.us-east-1.elb.amazonaws.com",
        ),
        ("Kinesis", "convox-httpd-Kinesis-1MAP0GJ6RITJF"),
        ("LogGroup", "convox-httpd-LogGroup-L4V203L35WRM"),
        ("RegistryId", "132866487567"),
        ("RegistryRepository", "convox-httpd-hqvvfosgxt"),
        ("Settings", "convox-httpd-settings-139bidzalmbtu"),
        ("WebPort80Balancer", "80"),
    ]
}

pub fn httpd_parameters() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Environment",
            "https://convox-httpd-settings-139bidzalmbtu.s3.amazonaws.com/releases/RVFETUHHKKD/env",
        ),
        ("WebPort80ProxyProtocol", "No"),
        ("WebCpu", "256"),
        ("VPC", "vpc-f8006b9c"),
        ("SubnetsPrivate", "subnet-d4e85cfe,subnet-103d5a66,subnet-57952a0f"),
        ("Subnets", "subnet-13de3139,subnet-b5578fc3,subnet-21c13379"),
        ("WebMemory", "256"),
        ("Cluster", "convox-Cluster-1E4XJ0PQWNAYS"),
        ("WebPort80Secure", "No"),
        ("Private", "Yes"),
        ("Repository", ""),
        ("WebPort80Balancer", "80"),
        ("WebPort80Host", "56694"),
        ("Release", "RVFETUHHKKD"),
        ("Version", "20160330143438-command-exec-form"),
        ("WebPort80Certificate", ""),
        (
            "Key",
            "arn:aws:kms:us-east-1:132866487567:key/d9f38426-9017-4931-84f8-604ad1524920",
        ),
        ("WebDesiredCount", "1"),
    ]
}

pub fn app_tags(name: &str) -> Vec<KeyValue> {
    kv(&[
        ("System", "convox"),
        ("Rack", "convox"),
        ("Name", name),
        ("Type", "app"),
    ])
}

pub fn httpd_stack() -> StackDescription {
    StackDescription {
        name: "convox-httpd".into(),
        status: "UPDATE_COMPLETE".into(),
        status_reason: "".into(),
        outputs: kv(&httpd_outputs()),
        parameters: kv(&httpd_parameters()),
        tags: app_tags("httpd"),
    }
}

pub fn worker_stack() -> StackDescription {
    StackDescription {
        name: "convox-worker".into(),
        status: "UPDATE_IN_PROGRESS".into(),
        status_reason: "".into(),
        outputs: kv(&[("LogGroup", "convox-worker-LogGroup-ABCDEFGH")]),
        parameters: kv(&[("Release", "RABCDEFGHIJ")]),
        tags: app_tags("worker"),
    }
}

/// Rack itself, not a resource
pub fn rack_stack() -> StackDescription {
    StackDescription {
        name: "convox".into(),
        status: "UPDATE_COMPLETE".into(),
        status_reason: "".into(),
        outputs: kv(&[("Cluster", "convox-Cluster-1E4XJ0PQWNAYS")]),
        parameters: vec![],
        tags: vec![],
    }
}

/// Resource owned by another rack in the same account
pub fn staging_stack() -> StackDescription {
    StackDescription {
        name: "staging-events".into(),
        status: "CREATE_COMPLETE".into(),
        status_reason: "".into(),
        outputs: vec![],
        parameters: vec![],
        tags: kv(&[
            ("Name", "events"),
            ("Rack", "staging"),
            ("Resource", "sqs"),
            ("System", "convox"),
            ("Type", "resource"),
        ]),
    }
}

pub fn rack_stacks() -> Vec<StackDescription> {
    vec![
        rack_stack(),
        syslog_stack(),
        httpd_stack(),
        staging_stack(),
        papertrail_stack(),
        worker_stack(),
    ]
}
