macro_rules! assert_near {
    ($lhs: expr, $rhs: expr, $diff: expr) => {
        let apprx_equal = ($lhs - $rhs).abs() < $diff;
        if !apprx_equal {
            panic!(
                "{lhs} = {lhs_val} is not apprx equal to {rhs} = {rhs_val}",
                lhs = stringify!($lhs),
                lhs_val = $lhs,
                rhs = stringify!($rhs),
                rhs_val = $rhs
            )
        }
    };
}

macro_rules! assert_vec_near {
    ($lhs: expr, $rhs: expr, $diff: expr) => {
        assert_near!($lhs.x, $rhs.x, $diff);
        assert_near!($lhs.y, $rhs.y, $diff);
        assert_near!($lhs.z, $rhs.z, $diff);
    };
}
