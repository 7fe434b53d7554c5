//! Precomputed month-changing solar term days, 1900-2100.
//!
//! Row `y - SOLAR_TERM_FIRST_YEAR` holds the day-of-month of each of the
//! 12 jeol terms for year `y`, in [`crate::solar_terms::TERM_MONTHS`] order:
//! Ipchun (Feb) through Daeseol (Dec), then Sohan of the following January.
//!
//! Dates are civil dates at UTC+9. Generated from the apparent solar longitude
//! (Meeus, low-precision series with nutation and aberration, ΔT applied).

/// First year covered by [`SOLAR_TERM_DAYS`].
pub const SOLAR_TERM_FIRST_YEAR: i32 = 1900;

/// Last year covered by [`SOLAR_TERM_DAYS`].
pub const SOLAR_TERM_LAST_YEAR: i32 = 2100;

#[rustfmt::skip]
pub(crate) const SOLAR_TERM_DAYS: [[u8; 12]; 201] = [
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 7, 6], // 1900
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1901
    [5, 6, 6, 6, 7, 8, 8, 8, 9, 8, 8, 6], // 1902
    [5, 7, 6, 7, 7, 8, 9, 9, 9, 8, 8, 7], // 1903
    [5, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1904
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1905
    [5, 6, 6, 6, 7, 8, 8, 8, 9, 8, 8, 6], // 1906
    [5, 7, 6, 7, 7, 8, 9, 9, 9, 8, 8, 7], // 1907
    [5, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1908
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1909
    [5, 6, 6, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1910
    [5, 7, 6, 7, 7, 8, 9, 9, 9, 8, 8, 7], // 1911
    [5, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1912
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1913
    [5, 6, 6, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1914
    [5, 7, 6, 7, 7, 8, 9, 9, 9, 8, 8, 7], // 1915
    [5, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1916
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1917
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1918
    [5, 7, 6, 6, 7, 8, 9, 9, 9, 8, 8, 6], // 1919
    [5, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 1920
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1921
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1922
    [5, 6, 6, 6, 7, 8, 8, 9, 9, 8, 8, 6], // 1923
    [5, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 1924
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 7, 6], // 1925
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1926
    [5, 6, 6, 6, 7, 8, 8, 9, 9, 8, 8, 6], // 1927
    [5, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 1928
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 7, 6], // 1929
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1930
    [5, 6, 6, 6, 7, 8, 8, 9, 9, 8, 8, 6], // 1931
    [5, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7, 6], // 1932
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1933
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1934
    [5, 6, 6, 6, 7, 8, 8, 8, 9, 8, 8, 6], // 1935
    [5, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7, 6], // 1936
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1937
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1938
    [5, 6, 6, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1939
    [5, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7, 6], // 1940
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1941
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1942
    [5, 6, 6, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1943
    [5, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7, 6], // 1944
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1945
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1946
    [5, 6, 6, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1947
    [5, 6, 5, 5, 6, 7, 8, 8, 8, 7, 7, 6], // 1948
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1949
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1950
    [5, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1951
    [5, 6, 5, 5, 6, 7, 7, 8, 8, 7, 7, 5], // 1952
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 1953
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1954
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1955
    [5, 5, 5, 5, 6, 7, 7, 8, 8, 7, 7, 5], // 1956
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 1957
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 7, 6], // 1958
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1959
    [5, 5, 5, 5, 6, 7, 7, 8, 8, 7, 7, 5], // 1960
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 1961
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1962
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1963
    [5, 5, 5, 5, 6, 7, 7, 7, 8, 7, 7, 5], // 1964
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 1965
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1966
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1967
    [5, 5, 5, 5, 6, 7, 7, 7, 8, 7, 7, 5], // 1968
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7, 6], // 1969
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1970
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1971
    [5, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 1972
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7, 6], // 1973
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1974
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1975
    [5, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 1976
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7, 6], // 1977
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1978
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1979
    [5, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 1980
    [4, 6, 5, 5, 6, 7, 7, 8, 8, 7, 7, 6], // 1981
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 1982
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1983
    [5, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 1984
    [4, 6, 5, 5, 6, 7, 7, 8, 8, 7, 7, 6], // 1985
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 1986
    [4, 6, 5, 6, 6, 8, 8, 8, 9, 8, 8, 6], // 1987
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 1988
    [4, 5, 5, 5, 6, 7, 7, 8, 8, 7, 7, 5], // 1989
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 1990
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1991
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 1992
    [4, 5, 5, 5, 6, 7, 7, 8, 8, 7, 7, 5], // 1993
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 1994
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1995
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 1996
    [4, 5, 5, 5, 6, 7, 7, 7, 8, 7, 7, 5], // 1997
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 1998
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 1999
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2000
    [4, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2001
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7, 6], // 2002
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 2003
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2004
    [4, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2005
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7, 6], // 2006
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 2007
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2008
    [4, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2009
    [4, 6, 5, 5, 6, 7, 7, 8, 8, 7, 7, 6], // 2010
    [4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7, 6], // 2011
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2012
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2013
    [4, 6, 5, 5, 6, 7, 7, 8, 8, 7, 7, 6], // 2014
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 2015
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2016
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2017
    [4, 6, 5, 5, 6, 7, 7, 8, 8, 7, 7, 6], // 2018
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 2019
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2020
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2021
    [4, 5, 5, 5, 6, 7, 7, 8, 8, 7, 7, 5], // 2022
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 2023
    [4, 5, 4, 5, 5, 6, 7, 7, 8, 7, 7, 5], // 2024
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2025
    [4, 5, 5, 5, 6, 7, 7, 7, 8, 7, 7, 5], // 2026
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 8, 7, 6], // 2027
    [4, 5, 4, 5, 5, 6, 7, 7, 8, 7, 6, 5], // 2028
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2029
    [4, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2030
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7, 6], // 2031
    [4, 5, 4, 5, 5, 6, 7, 7, 8, 7, 6, 5], // 2032
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2033
    [4, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2034
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7, 6], // 2035
    [4, 5, 4, 5, 5, 6, 7, 7, 8, 7, 6, 5], // 2036
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2037
    [4, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2038
    [4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7, 6], // 2039
    [4, 5, 4, 5, 5, 6, 7, 7, 8, 7, 6, 5], // 2040
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2041
    [4, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2042
    [4, 6, 5, 5, 6, 7, 7, 8, 8, 7, 7, 6], // 2043
    [4, 5, 4, 5, 5, 6, 7, 7, 8, 7, 6, 5], // 2044
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2045
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2046
    [4, 6, 5, 5, 6, 7, 7, 8, 8, 7, 7, 6], // 2047
    [4, 5, 4, 5, 5, 6, 7, 7, 7, 7, 6, 5], // 2048
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2049
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2050
    [4, 6, 5, 5, 6, 7, 7, 8, 8, 7, 7, 6], // 2051
    [4, 5, 4, 5, 5, 6, 7, 7, 7, 7, 6, 5], // 2052
    [3, 5, 4, 5, 5, 6, 7, 7, 8, 7, 7, 5], // 2053
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2054
    [4, 5, 5, 5, 6, 7, 7, 8, 8, 7, 7, 6], // 2055
    [4, 5, 4, 5, 5, 6, 7, 7, 7, 7, 6, 5], // 2056
    [3, 5, 4, 5, 5, 6, 7, 7, 8, 7, 7, 5], // 2057
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2058
    [4, 5, 5, 5, 6, 7, 7, 7, 8, 7, 7, 5], // 2059
    [4, 5, 4, 5, 5, 6, 7, 7, 7, 7, 6, 5], // 2060
    [3, 5, 4, 5, 5, 6, 7, 7, 8, 7, 6, 5], // 2061
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2062
    [4, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2063
    [4, 5, 4, 5, 5, 6, 7, 7, 7, 6, 6, 5], // 2064
    [3, 5, 4, 5, 5, 6, 7, 7, 8, 7, 6, 5], // 2065
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2066
    [4, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2067
    [4, 5, 4, 5, 5, 6, 7, 7, 7, 6, 6, 5], // 2068
    [3, 5, 4, 5, 5, 6, 7, 7, 8, 7, 6, 5], // 2069
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2070
    [4, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2071
    [4, 5, 4, 4, 5, 6, 6, 7, 7, 6, 6, 5], // 2072
    [3, 5, 4, 5, 5, 6, 7, 7, 8, 7, 6, 5], // 2073
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2074
    [4, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2075
    [4, 5, 4, 4, 5, 6, 6, 7, 7, 6, 6, 5], // 2076
    [3, 5, 4, 5, 5, 6, 7, 7, 8, 7, 6, 5], // 2077
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2078
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2079
    [4, 5, 4, 4, 5, 6, 6, 7, 7, 6, 6, 5], // 2080
    [3, 5, 4, 5, 5, 6, 7, 7, 7, 7, 6, 5], // 2081
    [3, 5, 4, 5, 5, 6, 7, 7, 8, 7, 7, 5], // 2082
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2083
    [4, 5, 4, 4, 5, 6, 6, 7, 7, 6, 6, 5], // 2084
    [3, 5, 4, 5, 5, 6, 7, 7, 7, 7, 6, 5], // 2085
    [3, 5, 4, 5, 5, 6, 7, 7, 8, 7, 7, 5], // 2086
    [4, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2087
    [4, 4, 4, 4, 5, 6, 6, 6, 7, 6, 6, 5], // 2088
    [3, 5, 4, 5, 5, 6, 7, 7, 7, 7, 6, 5], // 2089
    [3, 5, 4, 5, 5, 6, 7, 7, 8, 7, 7, 5], // 2090
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2091
    [4, 4, 4, 4, 4, 6, 6, 6, 7, 6, 6, 4], // 2092
    [3, 5, 4, 5, 5, 6, 7, 7, 7, 7, 6, 5], // 2093
    [3, 5, 4, 5, 5, 6, 7, 7, 8, 7, 6, 5], // 2094
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2095
    [4, 4, 4, 4, 4, 6, 6, 6, 7, 6, 6, 4], // 2096
    [3, 5, 4, 5, 5, 6, 7, 7, 7, 7, 6, 5], // 2097
    [3, 5, 4, 5, 5, 6, 7, 7, 8, 7, 6, 5], // 2098
    [3, 5, 4, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2099
    [4, 5, 5, 5, 5, 7, 7, 7, 8, 7, 7, 5], // 2100
];
