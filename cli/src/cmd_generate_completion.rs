// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Shell as ClapShell, generate};

use crate::Cli;

/// Prints a shell completion script for the dayplan command tree.
#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    /// Target shell; detected from `$SHELL` when not given.
    pub shell: Option<Shell>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: [SHELL] "The shell to generate for, defaults to the one in $SHELL")
                    .value_parser(value_parser!(Shell)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches.get_one::<Shell>("shell").copied(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let shell = match self.shell {
            Some(shell) => shell,
            None => Shell::from_env().ok_or("Cannot detect the shell from $SHELL, please name it")?,
        };

        tracing::debug!(?shell, "generating shell completion...");
        shell.generate(&mut io::stdout());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    fn from_env() -> Option<Self> {
        if std::env::var("SHELL").is_ok_and(|shell| shell.ends_with("nu")) {
            return Some(Self::Nushell);
        }

        ClapShell::from_env().and_then(|shell| match shell {
            ClapShell::Bash => Some(Self::Bash),
            ClapShell::Elvish => Some(Self::Elvish),
            ClapShell::Fish => Some(Self::Fish),
            ClapShell::PowerShell => Some(Self::PowerShell),
            ClapShell::Zsh => Some(Self::Zsh),
            _ => None,
        })
    }

    pub fn generate(self, buf: &mut impl io::Write) {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        match self {
            Self::Bash => generate(ClapShell::Bash, &mut cmd, name, buf),
            Self::Elvish => generate(ClapShell::Elvish, &mut cmd, name, buf),
            Self::Fish => generate(ClapShell::Fish, &mut cmd, name, buf),
            Self::PowerShell => generate(ClapShell::PowerShell, &mut cmd, name, buf),
            Self::Zsh => generate(ClapShell::Zsh, &mut cmd, name, buf),
            Self::Nushell => generate(clap_complete_nushell::Nushell, &mut cmd, name, buf),
        }
    }
}
