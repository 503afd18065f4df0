use std::cell::{Cell, RefCell};
use std::error::Error;
use std::fmt;
use std::rc::Rc;

use resultbox::{matchers, try_of, Fallback, IntoResultBox, ResultBox, WrongVariant};

#[derive(Debug, Clone, PartialEq)]
struct TestError(u32);

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "test error {}", self.0)
    }
}

impl Error for TestError {}

fn fn_that_fails() -> Result<i32, TestError> {
    Err(TestError(1))
}

#[test]
fn test_success_scenario() {
    let boxed = ResultBox::of(|| Ok::<_, TestError>("s"));
    assert!(boxed.is_success());
    assert_eq!(boxed.success_ref(), Some(&"s"));
    assert_eq!(boxed.clone().get(), Ok("s"));
    assert_eq!(boxed.get_cause(), Err(WrongVariant));
}

#[test]
fn test_failure_keeps_the_raised_instance() {
    let raised = Rc::new(TestError(9));
    let thrown = Rc::clone(&raised);

    let boxed: ResultBox<(), Rc<TestError>> = ResultBox::of(move || Err(thrown));
    assert!(boxed.is_failure());
    assert!(boxed.is_empty());

    let reraised = boxed.clone().get().unwrap_err();
    assert!(Rc::ptr_eq(&reraised, &raised));
    assert!(Rc::ptr_eq(&boxed.get_cause().unwrap(), &raised));
}

#[test]
fn test_recover_supplier_and_literal() {
    let by_supplier = ResultBox::of(fn_that_fails).recover(|_| true, Fallback::supplier(|| 21));
    let by_literal = ResultBox::of(fn_that_fails).recover(|_| true, 21);

    assert_eq!(by_supplier, ResultBox::Success(21));
    assert_eq!(by_literal, by_supplier);
    assert_eq!(by_literal.get(), Ok(21));
}

#[test]
fn test_recover_with_nested_box() {
    let boxed = ResultBox::of(fn_that_fails).recover_with(
        |_| true,
        Fallback::supplier(|| ResultBox::of(|| Ok::<_, TestError>(21))),
    );
    assert_eq!(boxed, ResultBox::Success(21));
    assert_eq!(boxed.get(), Ok(21));
}

#[test]
fn test_recover_never_touches_success() {
    let recover_calls = Cell::new(0);
    let boxed = ResultBox::of(|| Ok::<_, TestError>("s")).recover(
        |_| panic!("matcher must not run on a Success"),
        Fallback::supplier(|| {
            recover_calls.set(recover_calls.get() + 1);
            "recovered"
        }),
    );

    assert_eq!(recover_calls.get(), 0);
    assert_eq!(boxed.get(), Ok("s"));
}

#[test]
fn test_selective_recovery_by_cause() {
    let attempts = RefCell::new(Vec::new());
    let lookup = |key: u32| -> ResultBox<&'static str, TestError> {
        attempts.borrow_mut().push(key);
        match key {
            1 => ResultBox::success("primary"),
            _ => ResultBox::failure(TestError(key)),
        }
    };

    let result = lookup(2)
        .recover_with(matchers::eq(TestError(3)), Fallback::supplier(|| lookup(9)))
        .recover_with(matchers::eq(TestError(2)), Fallback::supplier(|| lookup(1)));

    assert_eq!(result, ResultBox::Success("primary"));
    assert_eq!(*attempts.borrow(), vec![2, 1]);
}

#[test]
fn test_boxed_error_causes() {
    let boxed: ResultBox<i32, Box<dyn Error>> = ResultBox::of(|| {
        let n: i32 = "12".parse()?;
        if n > 10 {
            return Err(Box::new(TestError(n as u32)) as Box<dyn Error>);
        }
        Ok(n)
    });

    let recovered = boxed.recover(matchers::is_error::<TestError, Box<dyn Error>>(), 10);
    assert_eq!(recovered.get().ok(), Some(10));
}

#[test]
fn test_panic_capture_and_recover() {
    let boxed = ResultBox::catching(|| -> u32 { panic!("lost connection") })
        .recover(|payload| resultbox::panic_message(payload) == Some("lost connection"), 0);
    assert_eq!(boxed.get_or_resume(), 0);
}

#[test]
fn test_try_of_with_question_mark() {
    let boxed: ResultBox<u16, std::num::ParseIntError> = try_of!("80".parse::<u16>()? + 8000);
    assert_eq!(boxed.get(), Ok(8080));
}

#[test]
fn test_into_result_box_from_result() {
    let boxed = fn_that_fails().into_result_box();
    assert_eq!(boxed.get_cause(), Ok(TestError(1)));
}

#[cfg(feature = "macros")]
mod attribute {
    use resultbox::{result_box, ResultBox};
    use std::num::ParseIntError;

    #[result_box]
    fn parse_port(raw: &str) -> Result<u16, ParseIntError> {
        let port = raw.trim().parse::<u16>()?;
        Ok(port)
    }

    #[result_box]
    fn first_of<T: Clone>(items: &[T]) -> Result<T, &'static str> {
        items.first().cloned().ok_or("empty")
    }

    #[result_box]
    #[cfg(any())]
    fn never_built() -> Result<u8, String> {
        helper_that_does_not_exist()
    }

    #[result_box]
    #[cfg(all())]
    #[allow(clippy::needless_return)]
    fn always_built() -> Result<u8, String> {
        return Ok(1);
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(" 80 "), ResultBox::Success(80));
        assert!(parse_port("http").is_failure());
    }

    #[test]
    fn test_generic_function() {
        assert_eq!(first_of(&[3, 4]), ResultBox::Success(3));
        assert_eq!(first_of::<u8>(&[]), ResultBox::Failure("empty"));
    }

    #[test]
    fn test_cfg_applies_to_whole_expansion() {
        assert_eq!(always_built(), ResultBox::Success(1));
    }
}
