use once_cell::sync::Lazy;
use regex::{
  Captures,
  Regex
};
use unicode_normalization::UnicodeNormalization;

static NUMBERS: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"[0-9]+")
    .expect("numbers pattern")
});

static URLS: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?:www|http)\S+")
    .expect("url pattern")
});

static EMAIL_ADDRESSES: Lazy<Regex> =
  Lazy::new(|| {
    Regex::new(
      r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}"
    )
    .expect("email pattern")
  });

static ITEMIZED_BULLETS: Lazy<Regex> =
  Lazy::new(|| {
    Regex::new(
      r"[(\s][0-9a-zA-Z][.)]\s+|[(\s][ivxIVX]+[.)]\s+"
    )
    .expect("bullet pattern")
  });

static PHONE_NUMBERS: Lazy<Regex> =
  Lazy::new(|| {
    Regex::new(
      r"(?:\+?(\d{1,3}))?[-. (]*(\d{3})[-. )]*(\d{3})[-. ]*(\d{4})(?: *x(\d+))?"
    )
    .expect("phone pattern")
  });

static SOCIAL_SECURITY_NUMBERS: Lazy<Regex> =
  Lazy::new(|| {
    Regex::new(
      r"\b(?:(\d{3})-(\d{2})-(\d{4})|(\d{3})(\d{2})(\d{4}))\b"
    )
    .expect("ssn pattern")
  });

static CREDIT_CARD_NUMBERS: Lazy<Regex> =
  Lazy::new(|| {
    Regex::new(concat!(
      r"4[0-9]{12}(?:[0-9]{3})?",
      r"|(?:5[1-5][0-9]{2}|222[1-9]|22[3-9][0-9]",
      r"|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}",
      r"|3[47][0-9]{13}",
      r"|3(?:0[0-5]|[68][0-9])[0-9]{11}",
      r"|6(?:011|5[0-9]{2})[0-9]{12}",
      r"|(?:2131|1800|35[0-9]{3})[0-9]{11}"
    ))
    .expect("credit card pattern")
  });

/// Removed by [`remove_special_characters`]
/// when no custom set is given.
pub const SPECIAL_CHARACTERS: &str =
  "å¼«¥ª°©ð±§µæ¹¢³¿®ä£";

pub fn make_lowercase(
  input: &str
) -> String {
  input.to_lowercase()
}

pub fn make_uppercase(
  input: &str
) -> String {
  input.to_uppercase()
}

pub fn remove_numbers(
  input: &str
) -> String {
  NUMBERS.replace_all(input, "").into_owned()
}

/// Drops anything starting with `www`
/// or `http` up to the next whitespace.
pub fn remove_urls(input: &str) -> String {
  URLS.replace_all(input, "").into_owned()
}

pub fn remove_email_addresses(
  input: &str
) -> String {
  EMAIL_ADDRESSES
    .replace_all(input, "")
    .into_owned()
}

/// Removes ASCII punctuation, or only
/// the characters in `custom` when it
/// is given.
pub fn remove_punctuation(
  input: &str,
  custom: Option<&str>
) -> String {
  match custom {
    | Some(set) => input
      .chars()
      .filter(|c| !set.contains(*c))
      .collect(),
    | None => input
      .chars()
      .filter(|c| !c.is_ascii_punctuation())
      .collect()
  }
}

/// Replaces list markers such as
/// ` 1. `, `(a) ` or ` iv) ` with a
/// single space.
pub fn remove_itemized_bullets(
  input: &str
) -> String {
  ITEMIZED_BULLETS
    .replace_all(input, " ")
    .into_owned()
}

/// Numbers such as `555-123-4567`,
/// `(555) 123 4567` or
/// `+1 555.123.4567 x89`.
pub fn remove_phone_numbers(
  input: &str
) -> String {
  PHONE_NUMBERS
    .replace_all(input, "")
    .into_owned()
}

/// Nine digit numbers, dashed as
/// `AAA-GG-SSSS` or not, that could be
/// issued: area `000`, `666` and `9xx`,
/// group `00`, serial `0000` and two
/// well known advertising numbers are
/// left alone.
pub fn remove_social_security_numbers(
  input: &str
) -> String {
  SOCIAL_SECURITY_NUMBERS
    .replace_all(input, |caps: &Captures| {
      let part = |dashed, plain| {
        caps
          .get(dashed)
          .or_else(|| caps.get(plain))
          .map_or("", |m| m.as_str())
      };
      let (area, group, serial) =
        (part(1, 4), part(2, 5), part(3, 6));
      if is_issuable_ssn(area, group, serial)
      {
        String::new()
      } else {
        caps[0].to_string()
      }
    })
    .into_owned()
}

fn is_issuable_ssn(
  area: &str,
  group: &str,
  serial: &str
) -> bool {
  let reserved = matches!(
    (area, group, serial),
    ("219", "09", "9999")
      | ("078", "05", "1120")
  );
  !reserved
    && area != "000"
    && area != "666"
    && !area.starts_with('9')
    && group != "00"
    && serial != "0000"
}

/// Visa, Mastercard, American Express,
/// Diners Club, Discover and JCB
/// numbers written without separators.
pub fn remove_credit_card_numbers(
  input: &str
) -> String {
  CREDIT_CARD_NUMBERS
    .replace_all(input, "")
    .into_owned()
}

/// Removes the characters in `custom`,
/// or [`SPECIAL_CHARACTERS`] by default.
pub fn remove_special_characters(
  input: &str,
  custom: Option<&str>
) -> String {
  let set =
    custom.unwrap_or(SPECIAL_CHARACTERS);
  input
    .chars()
    .filter(|c| !set.contains(*c))
    .collect()
}

/// Keeps letters and digits of any
/// script; spacing goes too.
pub fn keep_alpha_numeric(
  input: &str
) -> String {
  input
    .chars()
    .filter(|c| c.is_alphanumeric())
    .collect()
}

/// NFKD decomposition, then every
/// non-ASCII scalar is dropped, so
/// accents and umlauts fall away.
pub fn normalize_unicode(
  input: &str
) -> String {
  input
    .nfkd()
    .filter(char::is_ascii)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_urls_and_emails() {
    let input = "My email is john.doe@email.com. \
                 Visit www.johndoe.com today";
    let without_email =
      remove_email_addresses(input);
    assert_eq!(
      without_email,
      "My email is . Visit \
       www.johndoe.com today"
    );
    assert_eq!(
      remove_urls(&without_email),
      "My email is . Visit  today"
    );
  }

  #[test]
  fn removes_digits_and_punctuation() {
    assert_eq!(
      remove_numbers("room 101, floor 3"),
      "room , floor "
    );
    assert_eq!(
      remove_punctuation(
        "Hello, world!!! (ok)",
        None
      ),
      "Hello world ok"
    );
    assert_eq!(
      remove_punctuation(
        "a-b, c!",
        Some("!")
      ),
      "a-b, c"
    );
  }

  #[test]
  fn itemized_markers_become_spaces() {
    assert_eq!(
      remove_itemized_bullets(
        "Steps: 1. mix (b) bake iv) serve"
      ),
      "Steps: mix  bake serve"
    );
  }

  #[test]
  fn strips_phone_numbers() {
    assert_eq!(
      remove_phone_numbers(
        "Call +1 (555) 123-4567 x89 now"
      ),
      "Call  now"
    );
    assert_eq!(
      remove_phone_numbers(
        "or 555.123.4567, thanks"
      ),
      "or, thanks"
    );
    assert_eq!(
      remove_phone_numbers("room 101"),
      "room 101"
    );
  }

  #[test]
  fn strips_issuable_ssns_only() {
    assert_eq!(
      remove_social_security_numbers(
        "ssn 123-45-6789 or 123456789."
      ),
      "ssn  or ."
    );
    for kept in [
      "000-12-3456",
      "666-12-3456",
      "912-34-5678",
      "123-00-4567",
      "123-45-0000",
      "078-05-1120",
      "219099999",
      "1234567890"
    ] {
      assert_eq!(
        remove_social_security_numbers(kept),
        kept
      );
    }
  }

  #[test]
  fn strips_card_numbers() {
    assert_eq!(
      remove_credit_card_numbers(
        "visa 4111111111111111, amex \
         378282246310005."
      ),
      "visa , amex ."
    );
    assert_eq!(
      remove_credit_card_numbers(
        "order 12345"
      ),
      "order 12345"
    );
  }

  #[test]
  fn special_characters_and_alphanumerics() {
    assert_eq!(
      remove_special_characters(
        "50° ± 2 © ok",
        None
      ),
      "50  2  ok"
    );
    assert_eq!(
      remove_special_characters(
        "a#b$c",
        Some("#")
      ),
      "ab$c"
    );
    assert_eq!(
      keep_alpha_numeric("Héllo, World 42!"),
      "HélloWorld42"
    );
  }

  #[test]
  fn unicode_folds_to_ascii() {
    assert_eq!(
      normalize_unicode("Crème brûlée über ﬁne"),
      "Creme brulee uber fine"
    );
  }

  #[test]
  fn case_mapping() {
    assert_eq!(
      make_lowercase("ÀB c"),
      "àb c"
    );
    assert_eq!(
      make_uppercase("straße"),
      "STRASSE"
    );
  }
}
