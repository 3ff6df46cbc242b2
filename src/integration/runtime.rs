use std::collections::VecDeque;

use crate::core::{
    cmd::Cmd, cmd_executor::CmdExecutor, msg::Msg, state::AppState, update::update,
};

/// Drives messages through `update` and command results back into messages.
///
/// One runtime backs one browser session.
#[derive(Debug)]
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    cmd_queue: VecDeque<Cmd>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime without an executor; commands stay queued
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            cmd_executor: None,
        }
    }

    /// Create a new Runtime with command executor
    pub fn new_with_executor(initial_state: AppState, executor: CmdExecutor) -> Self {
        Self {
            cmd_executor: Some(executor),
            ..Self::new(initial_state)
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Queue a message without processing it
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Take all pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());

        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        all_commands
    }

    /// Process messages and execute commands until both queues are empty.
    ///
    /// Returns the number of commands executed. Without an executor the
    /// commands are left in the queue.
    pub fn run_update_cycle(&mut self) -> usize {
        let mut executed = 0;
        loop {
            self.process_all_messages();

            let Some(executor) = self.cmd_executor.as_ref() else {
                return executed;
            };
            if self.cmd_queue.is_empty() {
                return executed;
            }

            let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
            executed += commands.len();
            let feedback = executor.execute_commands(&commands);
            self.msg_queue.extend(feedback);
        }
    }

    /// Queue `msg` and run the update cycle to completion
    pub fn dispatch(&mut self, msg: impl Into<Msg>) -> &AppState {
        self.send_msg(msg.into());
        self.run_update_cycle();
        &self.state
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub has_executor: bool,
}
