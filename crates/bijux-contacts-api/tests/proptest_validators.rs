use bijux_contacts_api::validate::{is_valid_email, is_valid_id_mobile_phone};
use proptest::prelude::*;
use proptest::test_runner::Config;

proptest! {
    #![proptest_config(Config::with_cases(256))]
    #[test]
    fn generated_operator_numbers_are_accepted(
        prefix in "(0|62|\\+62)",
        operator in "(1[1-9]|2[1238]|3[1238]|5[12356789]|7[78]|9[5-9]|8[1-9])",
        rest in "[0-9]{5,11}"
    ) {
        let number = format!("{prefix}8{operator}{rest}");
        prop_assert!(is_valid_id_mobile_phone(&number), "{}", number);
    }

    #[test]
    fn numbers_with_letters_are_rejected(
        rest in "[0-9]{2,8}[a-z][0-9]{2,4}"
    ) {
        let number = format!("0812{rest}");
        prop_assert!(!is_valid_id_mobile_phone(&number), "{}", number);
    }

    #[test]
    fn simple_addresses_are_accepted(
        local in "[a-z0-9]{1,20}(\\.[a-z0-9]{1,8})?",
        host in "[a-z0-9]{1,20}",
        tld in "(com|org|net|id|co\\.id)"
    ) {
        let email = format!("{local}@{host}.{tld}");
        prop_assert!(is_valid_email(&email), "{}", email);
    }

    #[test]
    fn addresses_without_at_sign_are_rejected(value in "[a-z0-9.]{0,40}") {
        prop_assert!(!is_valid_email(&value));
    }
}
