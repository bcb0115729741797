/*!
# `INPUT ["prompt";] <variable> [, <variable> ...]`

## Purpose
Read values from the operator.

## Remarks
The optional quoted prompt prints once, then each variable prints
`? ` and takes one line of input. Numeric variables read the leading
number of the line, or 0 when there is none. String variables take
the line as typed. Running out of input entirely is INPUT PAST END.

## Example
```text
10 INPUT "NAME"; N$
20 PRINT "HELLO "; N$
RUN
NAME? SAM
HELLO SAM
```

*/
