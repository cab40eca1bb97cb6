/// Neumaier 補償求和（Kahan 的改良版）。
///
/// 各 quadrature rule 共用同一個求和核心，因此 scalar 與 batch 兩種
/// integrand 形式會得到逐位元相同的結果。
pub fn compensated_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for value in values {
        let t = sum + value;
        if f64::abs(sum) >= f64::abs(value) {
            compensation += (sum - t) + value;
        } else {
            compensation += (value - t) + sum;
        }
        sum = t;
    }
    sum + compensation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sum_is_zero() {
        assert_eq!(compensated_sum(Vec::new()), 0.0);
    }

    #[test]
    fn recovers_small_terms_lost_by_naive_summation() {
        let values = vec![1.0, 1e100, 1.0, -1e100];
        let naive: f64 = values.iter().sum();
        assert_eq!(naive, 0.0);
        assert_eq!(compensated_sum(values), 2.0);
    }

    #[test]
    fn repeated_tenths() {
        let values = std::iter::repeat(0.1).take(10);
        assert_eq!(compensated_sum(values), 1.0);
    }
}
