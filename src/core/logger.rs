//! Context-bound logger for call sites that do not pass a context
//!
//! A [`Logger`] fixes one context at construction and forwards every call
//! to the dispatch engine with it. Each level comes in three styles:
//!
//! - `info(args)`: the arguments as given
//! - `infof(template, args)`: `template` is substituted with `args` when
//!   any are given
//! - `infoln(args)`: plain concatenation, the first argument is never a
//!   template

use super::{
    context::Context,
    dispatch::{dispatch, enabled},
    log_level::LogLevel,
    message::Arg,
};

#[derive(Debug, Clone, Default)]
pub struct Logger {
    ctx: Context,
}

macro_rules! level_methods {
    ($($level:expr => $plain:ident, $printf:ident, $println:ident;)+) => {
        $(
            #[inline]
            pub fn $plain(&self, args: &[Arg<'_>]) {
                self.log($level, args);
            }

            #[inline]
            pub fn $printf(&self, template: &str, args: &[Arg<'_>]) {
                self.logf($level, template, args);
            }

            #[inline]
            pub fn $println(&self, args: &[Arg<'_>]) {
                self.logln($level, args);
            }
        )+
    };
}

impl Logger {
    #[must_use]
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn log(&self, level: LogLevel, args: &[Arg<'_>]) {
        dispatch(&self.ctx, level, None, args);
    }

    pub fn logf(&self, level: LogLevel, template: &str, args: &[Arg<'_>]) {
        if !enabled(&self.ctx, level) {
            return;
        }
        let mut all = Vec::with_capacity(args.len() + 1);
        all.push(Arg::from(template));
        all.extend(args.iter().cloned());
        dispatch(&self.ctx, level, None, &all);
    }

    pub fn logln(&self, level: LogLevel, args: &[Arg<'_>]) {
        match args.first() {
            Some(first) if first.is_template() => {
                if !enabled(&self.ctx, level) {
                    return;
                }
                let all: Vec<Arg<'_>> = args
                    .iter()
                    .enumerate()
                    .map(|(idx, arg)| if idx == 0 { arg.clone().into_plain() } else { arg.clone() })
                    .collect();
                dispatch(&self.ctx, level, None, &all);
            }
            _ => dispatch(&self.ctx, level, None, args),
        }
    }

    level_methods! {
        LogLevel::Debug => debug, debugf, debugln;
        LogLevel::Info => info, infof, infoln;
        LogLevel::Info => print, printf, println;
        LogLevel::Warn => warn, warnf, warnln;
        LogLevel::Error => error, errorf, errorln;
        LogLevel::Fatal => fatal, fatalf, fatalln;
        LogLevel::Panic => panic, panicf, panicln;
    }
}

/// A logger bound to `ctx`
pub fn new(ctx: Context) -> Logger {
    Logger::new(ctx)
}
