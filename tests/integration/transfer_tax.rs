/// Post-sale circulation of SPACE under the treasury tax.
#[cfg(test)]
mod tests {
    use crate::utils::SaleFixture;
    use soroban_sdk::{testutils::Address as _, Address};
    use space_ico::{Phase, UNIT};
    use space_token::tax_for;

    fn funded_holder(f: &SaleFixture) -> Address {
        let holder = f.seed_investors[0].clone();
        f.advance_to(Phase::Open);
        f.ico.contribute(&holder, &(20 * UNIT)); // 100 SPACE
        holder
    }

    #[test]
    fn test_untaxed_transfer_after_sale() {
        let f = SaleFixture::new();
        let holder = funded_holder(&f);
        let recipient = Address::generate(&f.env);

        f.space.transfer(&holder, &recipient, &(10 * UNIT));

        assert_eq!(f.space.balance(&holder), 90 * UNIT);
        assert_eq!(f.space.balance(&recipient), 10 * UNIT);
        assert_eq!(f.space.balance(&f.treasury), 0);
    }

    #[test]
    fn test_taxed_transfer_after_sale_owner_enables_tax() {
        let f = SaleFixture::new();
        let holder = funded_holder(&f);
        let recipient = Address::generate(&f.env);

        f.ico.set_token_tax(&f.owner, &true);
        f.space.transfer(&holder, &recipient, &(10 * UNIT));

        assert_eq!(f.space.balance(&holder), 90 * UNIT);
        assert_eq!(f.space.balance(&recipient), 98 * UNIT / 10);
        assert_eq!(f.space.balance(&f.treasury), 2 * UNIT / 10);
    }

    #[test]
    fn test_supply_is_conserved_across_taxed_transfers() {
        let f = SaleFixture::new();
        let holder = funded_holder(&f);
        let second = Address::generate(&f.env);
        let third = Address::generate(&f.env);

        f.ico.set_token_tax(&f.owner, &true);
        let supply = f.space.total_supply();

        let amounts = [7 * UNIT + 3, 1_234_567, 49];
        let mut expected_tax = 0;
        f.space.transfer(&holder, &second, &amounts[0]);
        expected_tax += tax_for(amounts[0]);
        f.space.transfer(&second, &third, &amounts[1]);
        expected_tax += tax_for(amounts[1]);
        f.space.transfer(&third, &holder, &amounts[2]);
        expected_tax += tax_for(amounts[2]);

        assert_eq!(f.space.balance(&f.treasury), expected_tax);
        let sum = f.space.balance(&holder)
            + f.space.balance(&second)
            + f.space.balance(&third)
            + f.space.balance(&f.treasury);
        assert_eq!(sum, supply);
        assert_eq!(f.space.total_supply(), supply);
    }

    #[test]
    fn test_treasury_spends_tax_untaxed() {
        let f = SaleFixture::new();
        let holder = funded_holder(&f);
        let recipient = Address::generate(&f.env);

        f.ico.set_token_tax(&f.owner, &true);
        f.space.transfer(&holder, &recipient, &(50 * UNIT));
        let collected = f.space.balance(&f.treasury);
        assert_eq!(collected, UNIT);

        f.space.transfer(&f.treasury, &recipient, &collected);
        assert_eq!(f.space.balance(&f.treasury), 0);
        assert_eq!(f.space.balance(&recipient), 50 * UNIT);
    }

    #[test]
    fn test_delegated_transfer_is_taxed_like_direct_transfer() {
        let f = SaleFixture::new();
        let holder = funded_holder(&f);
        let spender = Address::generate(&f.env);
        let recipient = Address::generate(&f.env);

        f.ico.set_token_tax(&f.owner, &true);
        f.space.approve(&holder, &spender, &(40 * UNIT));
        f.space.transfer_from(&spender, &holder, &recipient, &(25 * UNIT));

        assert_eq!(f.space.allowance(&holder, &spender), 15 * UNIT);
        assert_eq!(f.space.balance(&holder), 75 * UNIT);
        assert_eq!(f.space.balance(&recipient), 25 * UNIT - tax_for(25 * UNIT));
        assert_eq!(f.space.balance(&f.treasury), tax_for(25 * UNIT));
    }
}
