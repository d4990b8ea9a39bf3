/*!
   Error type used for the test framework.

   Errors that come from the chain CLI or the collaborating services are
   classified into a small taxonomy so that test failures carry enough
   context for diagnosis. Anything that does not fit the taxonomy is
   wrapped as a generic error with an [`eyre::Report`] trace.
*/

use core::convert::Into;
use std::io::Error as IoError;

use eyre::Report;
use flex_error::{define_error, TraceError};

define_error! {
    Error {
        Generic
            [ TraceError<Report> ]
            | _ | { "generic error" },

        CommandNotFound
            { command: String }
            [ TraceError<IoError> ]
            | e | { format!("failed to execute command: {}", e.command) },

        Assertion
            { message: String }
            | e | { format!("assertion failure: {}", e.message) },

        UploadFailed
            { raw_log: String }
            | e | { format!("failed to upload contract code: {}", e.raw_log) },

        InstantiateFailed
            { raw_log: String }
            | e | { format!("failed to instantiate contract: {}", e.raw_log) },

        ExecutionFailed
            { raw_log: String }
            | e | { format!("contract execution failed: {}", e.raw_log) },

        QueryFailed
            { response: String }
            | e | { format!("contract query returned an error: {}", e.response) },

        MalformedResponse
            { message: String }
            | e | { format!("malformed response from chain: {}", e.message) },

        CodeHashUnavailable
            { code_id: u64 }
            | e | { format!("no code hash found for code id {}", e.code_id) },

        CodeHashMismatch
            { expected: String, actual: String }
            | e | {
                format!(
                    "code hash on chain ({}) does not match the deployment ({})",
                    e.actual, e.expected
                )
            },

        FaucetExhausted
            { address: String, attempts: u16 }
            | e | {
                format!(
                    "account {} did not reach the target balance after {} faucet attempts",
                    e.address, e.attempts
                )
            },

        HttpRequest
            { url: String }
            [ TraceError<reqwest::Error> ]
            | e | { format!("http request failed: {}", e.url) },

        RetryExhausted
            { task_name: String, attempts: u16 }
            | e | {
                format!(
                    "task {} did not succeed after {} attempts",
                    e.task_name, e.attempts
                )
            },
    }
}

pub fn handle_generic_error(e: impl Into<Report>) -> Error {
    Error::generic(e.into())
}

pub fn handle_exec_error(command: &str) -> impl FnOnce(IoError) -> Error + '_ {
    |e| Error::command_not_found(command.to_string(), e)
}
