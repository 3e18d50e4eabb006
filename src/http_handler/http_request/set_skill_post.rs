use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use super::set_skill::SetSkillResponse;

/// Request type for the /set_skill/{key} endpoint.
#[derive(Debug)]
pub(crate) struct SetSkillRequest {
    endpoint: String,
    body: SetSkillBody,
}

#[derive(serde::Serialize, Debug)]
pub(crate) struct SetSkillBody {
    args: SkillArgs,
}

/// Serializes as the empty argument object the skill runner expects.
#[derive(serde::Serialize, Debug)]
pub(crate) struct SkillArgs {}

impl SetSkillRequest {
    pub(crate) fn new(skill_key: &str) -> Self {
        Self {
            endpoint: format!("/set_skill/{skill_key}"),
            body: SetSkillBody { args: SkillArgs {} },
        }
    }
}

impl JSONBodyHTTPRequestType for SetSkillRequest {
    /// The type of the json body.
    type Body = SetSkillBody;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for SetSkillRequest {
    /// Type of the expected response.
    type Response = SetSkillResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str { &self.endpoint }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
