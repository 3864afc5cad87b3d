use std::fmt;

use crate::{
    VERSION,
    error::{ConfigError, QuatError},
    quaternion::Quaternion,
    vector::Vec3,
};


/// Parsing states.
#[derive(Clone, Copy, PartialEq)]
enum Parse {
    None,
    Quat,
    Scalar,
    Axis,
    Angle,
    Degrees,
    Point,
}


#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Conjugate,
    Norm,
    Inverse,
    Normalize,
    Rotate,
    Version,
}
impl Operation {
    fn from_arg(arg: &str) -> Option<Self> {
        let op = match arg {
            "add"       => Self::Add,
            "sub"       => Self::Sub,
            "mul"       => Self::Mul,
            "div"       => Self::Div,
            "conj"      => Self::Conjugate,
            "norm"      => Self::Norm,
            "inv"       => Self::Inverse,
            "normalize" => Self::Normalize,
            "rotate"    => Self::Rotate,
            "version" | "-v" | "--version" => Self::Version,
            _ => return None,
        };
        Some(op)
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Add       => "add",
            Self::Sub       => "sub",
            Self::Mul       => "mul",
            Self::Div       => "div",
            Self::Conjugate => "conj",
            Self::Norm      => "norm",
            Self::Inverse   => "inv",
            Self::Normalize => "normalize",
            Self::Rotate    => "rotate",
            Self::Version   => "version",
        }
    }
}


/// Result of evaluating a command line.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    Quaternion(Quaternion),
    Scalar(f64),
    Point(Vec3),
    Version(&'static str),
}
impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Quaternion(q) => write!(f, "{q}"),
            Evaluation::Scalar(s)     => write!(f, "{s:?}"),
            Evaluation::Point(p)      => write!(f, "{p}"),
            Evaluation::Version(v)    => write!(f, "quat {v}"),
        }
    }
}


/// User defined configuration settings.
#[derive(Clone, Debug)]
pub struct Config {
    pub op:     Operation,
    pub quats:  Vec<Quaternion>,
    pub scalar: Option<f64>,
    pub axis:   Option<Vec3>,
    pub angle:  Option<f64>,
    pub point:  Option<Vec3>,
}
impl Config {
    /// Create a new Config with the specified command line arguments.
    pub fn new(args: Vec<String>) -> Result<Config, ConfigError> {
        let mut parser = Parse::None;
        let mut op     = None;
        let mut nums   = Vec::new();
        let mut cfg    = Config::default();

        for arg in args.into_iter() {
            let next = match arg.as_str() {
                "-q"     => Some(Parse::Quat),
                "-s"     => Some(Parse::Scalar),
                "-axis"  => Some(Parse::Axis),
                "-angle" => Some(Parse::Angle),
                "-deg"   => Some(Parse::Degrees),
                "-point" => Some(Parse::Point),
                _ => None,
            };
            if let Some(next) = next {
                cfg.finish(parser, &nums)?;
                nums.clear();
                parser = next;
                continue;
            }
            if let Ok(num) = arg.parse::<f64>() {
                if parser == Parse::None {
                    return Err(ConfigError::UnknownArgument(arg));
                }
                nums.push(num);
                continue;
            }
            match Operation::from_arg(&arg) {
                Some(parsed) if op.is_none() => {
                    cfg.finish(parser, &nums)?;
                    nums.clear();
                    parser = Parse::None;
                    op = Some(parsed);
                }
                _ if parser != Parse::None => {
                    return Err(ConfigError::InvalidNumber(arg));
                }
                _ => {
                    return Err(ConfigError::UnknownArgument(arg));
                }
            }
        }
        cfg.finish(parser, &nums)?;

        cfg.op = op.ok_or(ConfigError::MissingOperation)?;
        cfg.check_unused()?;
        log::debug!("parsed configuration: {cfg}");
        Ok(cfg)
    }

    /// Store the numbers collected for one flag.
    fn finish(&mut self, parser: Parse, nums: &[f64]) -> Result<(), ConfigError> {
        match parser {
            Parse::None => {}
            Parse::Quat => {
                if self.quats.len() == 2 {
                    return Err(ConfigError::TooManyQuaternions);
                }
                self.quats.push(Quaternion::try_from(nums)?);
            }
            Parse::Scalar => {
                set_once(&mut self.scalar, single(nums, "-s")?, "-s")?;
            }
            Parse::Axis => {
                set_once(&mut self.axis, Vec3::try_from(nums)?, "-axis")?;
            }
            Parse::Angle => {
                set_once(&mut self.angle, single(nums, "-angle")?, "-angle")?;
            }
            Parse::Degrees => {
                set_once(&mut self.angle, single(nums, "-deg")?.to_radians(), "-deg")?;
            }
            Parse::Point => {
                set_once(&mut self.point, Vec3::try_from(nums)?, "-point")?;
            }
        }
        Ok(())
    }

    /// Reject operands the chosen operation would never read.
    fn check_unused(&self) -> Result<(), ConfigError> {
        let quats = self.quats.len();
        let (max_quats, used): (usize, &[&str]) = match self.op {
            Operation::Add | Operation::Sub => (2, &[]),
            Operation::Mul | Operation::Div if quats == 2 => (2, &[]),
            Operation::Mul | Operation::Div => (2, &["-s"]),
            Operation::Conjugate
            | Operation::Norm
            | Operation::Inverse
            | Operation::Normalize => (1, &[]),
            Operation::Rotate if quats > 0 => (1, &["-point"]),
            Operation::Rotate => (1, &["-axis", "-angle", "-point"]),
            Operation::Version => (0, &[]),
        };
        if quats > max_quats {
            return Err(ConfigError::UnusedFlag { op: self.op.name(), flag: "-q" });
        }

        let given = [
            ("-s", self.scalar.is_some()),
            ("-axis", self.axis.is_some()),
            ("-angle", self.angle.is_some()),
            ("-point", self.point.is_some()),
        ];
        for (flag, present) in given {
            if present && !used.contains(&flag) {
                return Err(ConfigError::UnusedFlag { op: self.op.name(), flag });
            }
        }
        Ok(())
    }

    /// Apply the configured operation.
    pub fn evaluate(&self) -> Result<Evaluation, ConfigError> {
        let op = self.op;
        let res = match op {
            Operation::Add => {
                let (a, b) = self.pair()?;
                Evaluation::Quaternion(a + b)
            }
            Operation::Sub => {
                let (a, b) = self.pair()?;
                Evaluation::Quaternion(a - b)
            }
            Operation::Mul => {
                let a = self.first()?;
                let q = match (self.quats.get(1), self.scalar) {
                    (Some(b), _)    => a.checked_mul(*b)?,
                    (None, Some(s)) => a.checked_mul(s)?,
                    (None, None)    => return Err(missing(op, "a second quaternion (-q) or a scalar (-s)")),
                };
                Evaluation::Quaternion(q)
            }
            Operation::Div => {
                let a = self.first()?;
                let q = match (self.quats.get(1), self.scalar) {
                    (Some(b), _)    => a.checked_div(*b)?,
                    (None, Some(s)) => a.checked_div(s)?,
                    (None, None)    => return Err(missing(op, "a scalar (-s)")),
                };
                Evaluation::Quaternion(q)
            }
            Operation::Conjugate => Evaluation::Quaternion(self.first()?.conjugate()),
            Operation::Norm      => Evaluation::Scalar(self.first()?.norm()),
            Operation::Inverse   => Evaluation::Quaternion(self.first()?.inverse()),
            Operation::Normalize => Evaluation::Quaternion(self.first()?.normalize()),
            Operation::Rotate => {
                let point = self.point.ok_or_else(|| missing(op, "a point (-point)"))?;
                let qrot = match (self.quats.first(), self.axis, self.angle) {
                    (Some(q), _, _)             => *q,
                    (None, Some(axis), Some(theta)) => Quaternion::rotation(axis, theta),
                    _ => return Err(missing(op, "-axis with -angle or -deg, or a quaternion (-q)")),
                };
                log::info!("rotating {point} by {qrot}");
                Evaluation::Point(qrot.rotate(point))
            }
            Operation::Version => Evaluation::Version(VERSION),
        };
        Ok(res)
    }

    fn first(&self) -> Result<Quaternion, ConfigError> {
        self.quats.first().copied().ok_or_else(|| missing(self.op, "a quaternion (-q)"))
    }

    fn pair(&self) -> Result<(Quaternion, Quaternion), ConfigError> {
        match self.quats.as_slice() {
            [a, b] => Ok((*a, *b)),
            _ => Err(missing(self.op, "two quaternions (-q)")),
        }
    }
}
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation {}", self.op.name())?;
        for q in self.quats.iter() {
            write!(f, ", q = {q}")?;
        }
        if let Some(s) = self.scalar {
            write!(f, ", s = {s:?}")?;
        }
        if let Some(axis) = self.axis {
            write!(f, ", axis = {axis}")?;
        }
        if let Some(angle) = self.angle {
            write!(f, ", angle = {angle:?} rad")?;
        }
        if let Some(point) = self.point {
            write!(f, ", point = {point}")?;
        }
        Ok(())
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            op:     Operation::Version,
            quats:  Vec::new(),
            scalar: None,
            axis:   None,
            angle:  None,
            point:  None,
        }
    }
}

fn single(nums: &[f64], flag: &str) -> Result<f64, ConfigError> {
    match *nums {
        [n] => Ok(n),
        _ => Err(
            QuatError::InvalidArgument(
                format!("{flag} takes one number, got {}", nums.len())
            ).into()
        ),
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, flag: &'static str) -> Result<(), ConfigError> {
    if slot.is_some() {
        return Err(ConfigError::DuplicateFlag(flag));
    }
    *slot = Some(value);
    Ok(())
}

fn missing(op: Operation, what: &'static str) -> ConfigError {
    ConfigError::MissingOperand { op: op.name(), what }
}


#[cfg(test)]
fn args(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

#[test]
fn parse_multiply() {
    let cfg = Config::new(args("mul -q 1 2 3 4 -q 1 4 5 6")).unwrap();

    assert_eq!(cfg.op, Operation::Mul);
    assert_eq!(cfg.quats, vec![Quaternion::new(1.0, 2.0, 3.0, 4.0), Quaternion::new(1.0, 4.0, 5.0, 6.0)]);
    assert_eq!(cfg.evaluate().unwrap(), Evaluation::Quaternion(Quaternion::new(-46.0, 4.0, 12.0, 8.0)));
}

#[test]
fn operation_may_follow_operands() {
    let cfg = Config::new(args("-q 1 2 3 4 -s -2 mul")).unwrap();

    assert_eq!(cfg.scalar, Some(-2.0));
    assert_eq!(cfg.evaluate().unwrap(), Evaluation::Quaternion(Quaternion::new(-2.0, -4.0, -6.0, -8.0)));
}

#[test]
fn divide_by_scalar_only() {
    let cfg = Config::new(args("div -q 1 2 3 4 -s 2")).unwrap();
    assert_eq!(cfg.evaluate().unwrap(), Evaluation::Quaternion(Quaternion::new(0.5, 1.0, 1.5, 2.0)));

    let cfg = Config::new(args("div -q 1 2 3 4 -q 1 0 0 0")).unwrap();
    assert!(matches!(
        cfg.evaluate(),
        Err(ConfigError::Quaternion(QuatError::InvalidArgument(_)))
    ));
}

#[test]
fn unary_operations() {
    let cfg = Config::new(args("norm -q 1 2 3 4")).unwrap();
    assert_eq!(cfg.evaluate().unwrap(), Evaluation::Scalar(30.0f64.sqrt()));

    let cfg = Config::new(args("conj -q 1 2 3 4")).unwrap();
    assert_eq!(cfg.evaluate().unwrap(), Evaluation::Quaternion(Quaternion::new(1.0, -2.0, -3.0, -4.0)));
}

#[test]
fn rotate_by_axis_angle() {
    let cfg = Config::new(args("rotate -axis 0 0 1 -deg 90 -point 1 0 0")).unwrap();

    match cfg.evaluate().unwrap() {
        Evaluation::Point(p) => approx::assert_abs_diff_eq!(p, Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-12),
        other => panic!("unexpected result {other}"),
    }
}

#[test]
fn rotate_needs_point() {
    let cfg = Config::new(args("rotate -axis 0 0 1 -angle 1.0")).unwrap();
    assert!(matches!(cfg.evaluate(), Err(ConfigError::MissingOperand { op: "rotate", .. })));
}

#[test]
fn rejects_bad_input() {
    assert!(matches!(Config::new(args("-q 1 2 3 4")), Err(ConfigError::MissingOperation)));
    assert!(matches!(Config::new(args("frobnicate")), Err(ConfigError::UnknownArgument(_))));
    assert!(matches!(Config::new(args("add -q 1 2 three 4")), Err(ConfigError::InvalidNumber(_))));
    assert!(matches!(
        Config::new(args("norm -q 1 2 3")),
        Err(ConfigError::Quaternion(QuatError::InvalidArgument(_)))
    ));
    assert!(matches!(
        Config::new(args("add -q 1 0 0 0 -q 1 0 0 0 -q 1 0 0 0")),
        Err(ConfigError::TooManyQuaternions)
    ));
    assert!(matches!(
        Config::new(args("mul -q 1 2 3 4 -s 1 2")),
        Err(ConfigError::Quaternion(QuatError::InvalidArgument(_)))
    ));
}

#[test]
fn add_needs_two_quaternions() {
    let cfg = Config::new(args("add -q 1 2 3 4")).unwrap();
    assert!(matches!(cfg.evaluate(), Err(ConfigError::MissingOperand { op: "add", .. })));
}

#[test]
fn version() {
    let cfg = Config::new(args("--version")).unwrap();
    assert_eq!(cfg.evaluate().unwrap().to_string(), format!("quat {VERSION}"));
}

#[test]
fn rejects_repeated_flags() {
    assert!(matches!(
        Config::new(args("mul -q 1 2 3 4 -s 1 -s 2")),
        Err(ConfigError::DuplicateFlag("-s"))
    ));
    assert!(matches!(
        Config::new(args("rotate -axis 1 0 0 -axis 0 1 0 -angle 1 -point 1 0 0")),
        Err(ConfigError::DuplicateFlag("-axis"))
    ));
    assert!(matches!(
        Config::new(args("rotate -axis 1 0 0 -angle 1 -deg 90 -point 1 0 0")),
        Err(ConfigError::DuplicateFlag("-deg"))
    ));
}

#[test]
fn rejects_flags_the_operation_ignores() {
    assert!(matches!(
        Config::new(args("norm -q 1 2 3 4 -axis 0 0 1")),
        Err(ConfigError::UnusedFlag { op: "norm", flag: "-axis" })
    ));
    assert!(matches!(
        Config::new(args("add -q 1 2 3 4 -q 1 0 0 0 -s 2")),
        Err(ConfigError::UnusedFlag { op: "add", flag: "-s" })
    ));
    assert!(matches!(
        Config::new(args("mul -q 1 2 3 4 -q 1 0 0 0 -s 2")),
        Err(ConfigError::UnusedFlag { op: "mul", flag: "-s" })
    ));
    assert!(matches!(
        Config::new(args("inv -q 1 2 3 4 -q 1 0 0 0")),
        Err(ConfigError::UnusedFlag { op: "inv", flag: "-q" })
    ));
    assert!(matches!(
        Config::new(args("rotate -q 1 0 0 0 -axis 0 0 1 -point 1 0 0")),
        Err(ConfigError::UnusedFlag { op: "rotate", flag: "-axis" })
    ));
    assert!(Config::new(args("rotate -q 1 0 0 0 -point 1 0 0")).is_ok());
}
