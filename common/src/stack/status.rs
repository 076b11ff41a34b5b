/// Status reported for a stack that was just submitted for creation
pub const CREATE_IN_PROGRESS: &str = "CREATE_IN_PROGRESS";

/// Map a CloudFormation stack status to the status shown to rack users
///
/// Statuses the rack does not know about are passed through untouched.
pub fn humanize(status: &str) -> &str {
    match status {
        "CREATE_IN_PROGRESS" => "creating",

        "CREATE_COMPLETE" | "UPDATE_COMPLETE" | "UPDATE_ROLLBACK_COMPLETE" => "running",

        "UPDATE_IN_PROGRESS"
        | "UPDATE_COMPLETE_CLEANUP_IN_PROGRESS"
        | "UPDATE_ROLLBACK_IN_PROGRESS"
        | "UPDATE_ROLLBACK_COMPLETE_CLEANUP_IN_PROGRESS" => "updating",

        "DELETE_IN_PROGRESS" => "deleting",

        "CREATE_FAILED"
        | "DELETE_FAILED"
        | "ROLLBACK_IN_PROGRESS"
        | "ROLLBACK_COMPLETE"
        | "ROLLBACK_FAILED"
        | "UPDATE_ROLLBACK_FAILED" => "failed",

        _ => status,
    }
}
